//! Integration tests for session persistence across host restarts
//!
//! Runs the persistence bridge against a SQLite store, shuts it down, then
//! restores into a fresh manager from the same database file.

use super::common::TempSqliteStore;
use std::sync::Arc;
use std::time::Duration;
use tabdeck::session::RestoreOutcome;
use tabdeck::{PersistenceBridge, SessionStore, ShellConfig, TabManager};
use tokio_util::sync::CancellationToken;

fn bridge_for(store: &TempSqliteStore) -> (TabManager, Arc<PersistenceBridge>) {
    let manager = TabManager::new(ShellConfig::default());
    let bridge = PersistenceBridge::new(manager.clone(), Arc::new(store.open()))
        .with_debounce(Duration::from_millis(20));
    (manager, Arc::new(bridge))
}

/// Tabs, titles and the active tab survive a restart
#[tokio::test]
async fn test_session_survives_restart() {
    let store = TempSqliteStore::new();

    // First run
    let (manager, bridge) = bridge_for(&store);
    let shutdown = CancellationToken::new();
    let task = bridge.clone().spawn(shutdown.clone());
    manager.wait_until_loaded().await;

    manager.create_tab(None).unwrap();
    let third = manager.create_tab(None).unwrap();
    manager.close_tab("tab-2");
    manager.update_tab_title(&third.id, "logs");
    manager.switch_tab("tab-1");

    shutdown.cancel();
    task.await.unwrap();

    // Second run
    let (manager, bridge) = bridge_for(&store);
    assert_eq!(bridge.restore().await, RestoreOutcome::Restored { tabs: 2 });
    assert!(manager.is_session_loaded());

    let tabs = manager.tabs();
    let ids: Vec<&str> = tabs.iter().map(|tab| tab.id.as_str()).collect();
    assert_eq!(ids, vec!["tab-1", "tab-3"]);
    assert_eq!(tabs[1].title, "logs");
    assert_eq!(tabs[1].color_theme, third.color_theme);
    assert_eq!(manager.active_tab_id().as_deref(), Some("tab-1"));

    // New ids continue past the restored ones
    let fresh = manager.create_tab(None).unwrap();
    assert_eq!(fresh.id, "tab-4");
}

/// An empty database keeps the default tab and persists it once loaded
#[tokio::test]
async fn test_first_run_persists_default_tab() {
    let store = TempSqliteStore::new();

    let (manager, bridge) = bridge_for(&store);
    let shutdown = CancellationToken::new();
    let task = bridge.clone().spawn(shutdown.clone());
    manager.wait_until_loaded().await;
    assert_eq!(manager.len(), 1);

    shutdown.cancel();
    task.await.unwrap();

    let stored = store.open().load().await.unwrap().unwrap();
    assert_eq!(stored, manager.session_record());
}

/// A second restore attempt is ignored
#[tokio::test]
async fn test_restore_runs_once() {
    let store = TempSqliteStore::new();
    let (_manager, bridge) = bridge_for(&store);

    assert_eq!(bridge.restore().await, RestoreOutcome::Empty);
    assert_eq!(bridge.restore().await, RestoreOutcome::AlreadyAttempted);
}
