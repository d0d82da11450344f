//! Shared handle over the tab registry.
//!
//! `TabManager` serializes every lifecycle operation through one lock, so each
//! operation is applied atomically, and publishes a revision counter on a watch
//! channel whenever the tab list or the active tab actually changes. The
//! persistence bridge subscribes to that channel.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use super::model::{ShellConfig, Tab, TabError, TabsSnapshot};
use super::registry::{TabRegistry, MAX_TABS};
use crate::session::SessionRecord;

/// Cloneable handle to one tab registry.
#[derive(Clone)]
pub struct TabManager {
    registry: Arc<Mutex<TabRegistry>>,
    changes: Arc<watch::Sender<u64>>,
}

impl TabManager {
    pub fn new(default_shell: ShellConfig) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            registry: Arc::new(Mutex::new(TabRegistry::new(default_shell))),
            changes: Arc::new(changes),
        }
    }

    /// Subscribe to state-change notifications.
    ///
    /// The receiver yields a monotonically increasing revision; the current
    /// revision is already marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.changes.borrow()
    }

    pub fn create_tab(&self, shell: Option<ShellConfig>) -> Result<Tab, TabError> {
        self.apply(|registry| {
            let result = registry.create(shell);
            let changed = result.is_ok();
            (result, changed)
        })
    }

    pub fn close_tab(&self, tab_id: &str) {
        self.apply_flag(|registry| registry.close(tab_id));
    }

    pub fn switch_tab(&self, tab_id: &str) {
        self.apply_flag(|registry| registry.switch(tab_id));
    }

    pub fn reorder_tabs(&self, from_index: usize, to_index: usize) {
        self.apply_flag(|registry| registry.reorder(from_index, to_index));
    }

    pub fn update_tab_title(&self, tab_id: &str, title: impl Into<String>) {
        let title = title.into();
        self.apply_flag(|registry| registry.update_title(tab_id, title));
    }

    pub fn update_tab_shell_config(&self, tab_id: &str, shell: ShellConfig) {
        self.apply_flag(|registry| registry.update_shell_config(tab_id, shell));
    }

    pub fn update_tab_color_theme(&self, tab_id: &str, theme: impl Into<String>) {
        let theme = theme.into();
        self.apply_flag(|registry| registry.update_color_theme(tab_id, theme));
    }

    /// Current tabs in display order.
    pub fn tabs(&self) -> Vec<Tab> {
        self.registry.lock().tabs().to_vec()
    }

    pub fn active_tab_id(&self) -> Option<String> {
        self.registry.lock().active_tab_id().map(str::to_string)
    }

    /// The active tab, or `None` if the active id matches nothing.
    pub fn active_tab(&self) -> Option<Tab> {
        self.registry.lock().active_tab().cloned()
    }

    pub fn len(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().is_empty()
    }

    /// Consistent view of the whole registry taken under one lock.
    pub fn snapshot(&self) -> TabsSnapshot {
        let registry = self.registry.lock();
        TabsSnapshot {
            tabs: registry.tabs().to_vec(),
            active_tab_id: registry.active_tab_id().map(str::to_string),
            active_tab: registry.active_tab().cloned(),
            session_loaded: registry.session_loaded(),
            max_tabs: MAX_TABS,
        }
    }

    pub fn is_session_loaded(&self) -> bool {
        self.registry.lock().session_loaded()
    }

    pub fn default_shell_config(&self) -> ShellConfig {
        self.registry.lock().default_shell().clone()
    }

    /// Change the shell config used for tabs created without one.
    pub fn set_default_shell_config(&self, shell: ShellConfig) {
        self.registry.lock().set_default_shell(shell);
    }

    /// Serialize the current registry to the persisted wire shape.
    pub fn session_record(&self) -> SessionRecord {
        self.registry.lock().to_record()
    }

    /// Replace the registry with a persisted session. Returns the restored count.
    pub fn restore_from(&self, record: SessionRecord) -> usize {
        self.apply(|registry| {
            let count = registry.restore(record);
            (count, count > 0)
        })
    }

    /// Open the persistence gate; notifies subscribers on the first call only.
    pub fn mark_session_loaded(&self) {
        self.apply_flag(|registry| registry.mark_session_loaded());
    }

    /// Resolve once the session gate is open.
    pub async fn wait_until_loaded(&self) {
        let mut changes = self.subscribe();
        while !self.is_session_loaded() {
            if changes.changed().await.is_err() {
                return;
            }
        }
    }

    fn apply<T>(&self, op: impl FnOnce(&mut TabRegistry) -> (T, bool)) -> T {
        let (result, changed) = {
            let mut registry = self.registry.lock();
            op(&mut registry)
        };
        if changed {
            self.changes.send_modify(|revision| *revision += 1);
        }
        result
    }

    fn apply_flag(&self, op: impl FnOnce(&mut TabRegistry) -> bool) {
        self.apply(|registry| ((), op(registry)));
    }
}

impl std::fmt::Debug for TabManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.lock();
        f.debug_struct("TabManager")
            .field("tabs", &registry.len())
            .field("active_tab_id", &registry.active_tab_id())
            .field("session_loaded", &registry.session_loaded())
            .finish()
    }
}
