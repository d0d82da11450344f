//! Integration tests for the HTTP session store against a live host

use super::common::{TempSqliteStore, TestHost};
use std::sync::Arc;
use std::time::Duration;
use tabdeck::session::{RestoreOutcome, SessionTabRecord};
use tabdeck::{
    HttpSessionStore, PersistenceBridge, SessionRecord, SessionStore, ShellConfig, TabManager,
};
use tokio_util::sync::CancellationToken;

/// Records written through the HTTP store land in the host's SQLite store
#[tokio::test]
async fn test_http_store_round_trips_through_host() {
    let sqlite = TempSqliteStore::new();
    let host = TestHost::start(Arc::new(sqlite.open())).await;
    let store = HttpSessionStore::new(&host.base_url());

    assert_eq!(store.load().await.unwrap(), None);

    let record = SessionRecord {
        tabs: vec![
            SessionTabRecord {
                id: Some("tab-1".to_string()),
                title: Some("api".to_string()),
                ..SessionTabRecord::default()
            },
            SessionTabRecord {
                id: Some("tab-2".to_string()),
                color_theme: Some("teal".to_string()),
                ..SessionTabRecord::default()
            },
        ],
        active_tab_id: Some("tab-2".to_string()),
    };
    store.save(&record).await.unwrap();

    assert_eq!(store.load().await.unwrap(), Some(record.clone()));
    assert_eq!(sqlite.open().load().await.unwrap(), Some(record));

    host.stop().await;
}

/// A client-side manager persists through the host and restores from it
#[tokio::test]
async fn test_remote_bridge_restores_from_host() {
    let sqlite = TempSqliteStore::new();
    let host = TestHost::start(Arc::new(sqlite.open())).await;

    let manager = TabManager::new(ShellConfig::default());
    let bridge = Arc::new(
        PersistenceBridge::new(
            manager.clone(),
            Arc::new(HttpSessionStore::new(&host.base_url())),
        )
        .with_debounce(Duration::from_millis(20)),
    );
    let shutdown = CancellationToken::new();
    let task = bridge.clone().spawn(shutdown.clone());
    manager.wait_until_loaded().await;

    manager.create_tab(None).unwrap();
    manager.update_tab_color_theme("tab-1", "crimson");
    shutdown.cancel();
    task.await.unwrap();

    let restored = TabManager::new(ShellConfig::default());
    let bridge = PersistenceBridge::new(
        restored.clone(),
        Arc::new(HttpSessionStore::new(&host.base_url())),
    );
    assert_eq!(bridge.restore().await, RestoreOutcome::Restored { tabs: 2 });
    assert_eq!(restored.session_record(), manager.session_record());

    host.stop().await;
}

/// An unreachable host still opens the session gate
#[tokio::test]
async fn test_unreachable_host_keeps_default_tab() {
    let manager = TabManager::new(ShellConfig::default());
    let bridge = PersistenceBridge::new(
        manager.clone(),
        Arc::new(HttpSessionStore::new("http://127.0.0.1:9")),
    );

    assert_eq!(bridge.restore().await, RestoreOutcome::Failed);
    assert!(manager.is_session_loaded());
    assert_eq!(manager.len(), 1);
}
