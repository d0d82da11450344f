//! Integration tests for the tab lifecycle over the Tab State API
//!
//! Drives a live host with real HTTP requests and checks the registry the
//! host holds after each step.

use super::common::TestHost;
use serde_json::{json, Value};
use std::sync::Arc;
use tabdeck::{MemorySessionStore, MAX_TABS};

async fn get_state(client: &reqwest::Client, host: &TestHost) -> Value {
    client
        .get(host.url("/api/tabs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn ids(state: &Value) -> Vec<String> {
    state["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tab| tab["id"].as_str().unwrap().to_string())
        .collect()
}

/// Create, rename, reorder and close tabs through the API
#[tokio::test]
async fn test_full_tab_lifecycle() {
    let host = TestHost::start(Arc::new(MemorySessionStore::new())).await;
    let client = reqwest::Client::new();

    let state = get_state(&client, &host).await;
    assert_eq!(ids(&state), vec!["tab-1"]);
    assert_eq!(state["tabs"][0]["title"], "Terminal 1");
    assert_eq!(state["tabs"][0]["colorTheme"], "ocean");

    for _ in 0..2 {
        let response = client
            .post(host.url("/api/tabs"))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    let state = get_state(&client, &host).await;
    assert_eq!(ids(&state), vec!["tab-1", "tab-2", "tab-3"]);
    assert_eq!(state["activeTabId"], "tab-3");
    assert_eq!(state["tabs"][2]["title"], "Terminal 3");
    assert_eq!(state["tabs"][2]["colorTheme"], "sunset");

    client
        .patch(host.url("/api/tabs/tab-2"))
        .json(&json!({ "title": "build" }))
        .send()
        .await
        .unwrap();
    client
        .post(host.url("/api/tabs/reorder"))
        .json(&json!({ "fromIndex": 2, "toIndex": 0 }))
        .send()
        .await
        .unwrap();

    let state = get_state(&client, &host).await;
    assert_eq!(ids(&state), vec!["tab-3", "tab-1", "tab-2"]);
    assert_eq!(state["tabs"][2]["title"], "build");
    // Reordering never changes the active tab
    assert_eq!(state["activeTabId"], "tab-3");

    // Closing the active tab at index 0 activates its right neighbour
    client
        .delete(host.url("/api/tabs/tab-3"))
        .send()
        .await
        .unwrap();
    let state = get_state(&client, &host).await;
    assert_eq!(ids(&state), vec!["tab-1", "tab-2"]);
    assert_eq!(state["activeTabId"], "tab-1");

    // A fresh tab never reuses a closed id
    let created: Value = client
        .post(host.url("/api/tabs"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], "tab-4");

    host.stop().await;
}

/// The last remaining tab cannot be closed
#[tokio::test]
async fn test_last_tab_survives_close() {
    let host = TestHost::start(Arc::new(MemorySessionStore::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(host.url("/api/tabs/tab-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let state = get_state(&client, &host).await;
    assert_eq!(ids(&state), vec!["tab-1"]);
    assert_eq!(state["activeTabId"], "tab-1");

    host.stop().await;
}

/// Creating past the limit is rejected without touching the registry
#[tokio::test]
async fn test_capacity_limit() {
    let host = TestHost::start(Arc::new(MemorySessionStore::new())).await;
    let client = reqwest::Client::new();

    for _ in 1..MAX_TABS {
        host.tabs.create_tab(None).unwrap();
    }
    let revision = host.tabs.revision();

    let response = client
        .post(host.url("/api/tabs"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "MAX_TABS_REACHED");

    assert_eq!(host.tabs.len(), MAX_TABS);
    assert_eq!(host.tabs.revision(), revision);

    host.stop().await;
}
