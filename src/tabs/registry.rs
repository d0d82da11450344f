//! The tab registry: ordered tabs plus the active-tab pointer.
//!
//! Every operation is a plain synchronous state transition. Operations that
//! target an unknown tab or an out-of-range index are absorbed as no-ops (a UI
//! may race a close against a pending action on the same tab); they return
//! `false` and leave a debug trace instead of failing.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, warn};

use super::allocator::{theme_at, TabAllocator};
use super::model::{ShellConfig, Tab, TabError};
use crate::session::SessionRecord;

/// Maximum number of open tabs.
pub const MAX_TABS: usize = 20;

/// Authoritative in-memory tab state for one manager.
#[derive(Debug, Clone)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    session_loaded: bool,
    allocator: TabAllocator,
    default_shell: ShellConfig,
}

impl TabRegistry {
    /// Create a registry holding a single default tab.
    pub fn new(default_shell: ShellConfig) -> Self {
        let mut registry = Self {
            tabs: Vec::with_capacity(1),
            active_tab_id: None,
            session_loaded: false,
            allocator: TabAllocator::new(),
            default_shell,
        };
        let tab = registry.build_tab(None);
        registry.active_tab_id = Some(tab.id.clone());
        registry.tabs.push(tab);
        registry
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// The tab matching the active id, if any.
    pub fn active_tab(&self) -> Option<&Tab> {
        let active = self.active_tab_id.as_deref()?;
        self.tabs.iter().find(|tab| tab.id == active)
    }

    pub fn session_loaded(&self) -> bool {
        self.session_loaded
    }

    pub fn can_add_tab(&self) -> bool {
        self.tabs.len() < MAX_TABS
    }

    pub fn default_shell(&self) -> &ShellConfig {
        &self.default_shell
    }

    pub fn set_default_shell(&mut self, shell: ShellConfig) {
        self.default_shell = shell;
    }

    /// Append a new tab and make it active.
    pub fn create(&mut self, shell: Option<ShellConfig>) -> Result<Tab, TabError> {
        if !self.can_add_tab() {
            return Err(TabError::MaxTabsReached { max: MAX_TABS });
        }

        let tab = self.build_tab(shell);
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab.clone());
        debug!(tab_id = %tab.id, theme = %tab.color_theme, "Tab created");
        Ok(tab)
    }

    /// Remove a tab. The last remaining tab is never closed.
    ///
    /// Closing the active tab activates its left neighbour, or the new first
    /// tab when the closed one was first.
    pub fn close(&mut self, tab_id: &str) -> bool {
        if self.tabs.len() <= 1 {
            debug!(tab_id, "Close ignored: last tab");
            return false;
        }
        let Some(index) = self.position(tab_id) else {
            debug!(tab_id, "Close ignored: tab not found");
            return false;
        };

        let removed = self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(removed.id.as_str()) {
            let next = index.saturating_sub(1);
            self.active_tab_id = self.tabs.get(next).map(|tab| tab.id.clone());
        }
        debug!(tab_id, "Tab closed");
        true
    }

    pub fn switch(&mut self, tab_id: &str) -> bool {
        if self.position(tab_id).is_none() {
            debug!(tab_id, "Switch ignored: tab not found");
            return false;
        }
        if self.active_tab_id.as_deref() == Some(tab_id) {
            return false;
        }
        self.active_tab_id = Some(tab_id.to_string());
        true
    }

    /// Move the tab at `from` to `to`, shifting the tabs in between.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.tabs.len();
        if from >= len || to >= len {
            debug!(from, to, len, "Reorder ignored: index out of range");
            return false;
        }
        if from == to {
            return false;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        true
    }

    pub fn update_title(&mut self, tab_id: &str, title: String) -> bool {
        self.update_field(tab_id, "title", |tab| {
            replace_if_changed(&mut tab.title, title)
        })
    }

    pub fn update_shell_config(&mut self, tab_id: &str, shell: ShellConfig) -> bool {
        self.update_field(tab_id, "shell_config", |tab| {
            replace_if_changed(&mut tab.shell_config, shell)
        })
    }

    pub fn update_color_theme(&mut self, tab_id: &str, theme: String) -> bool {
        self.update_field(tab_id, "color_theme", |tab| {
            replace_if_changed(&mut tab.color_theme, theme)
        })
    }

    /// Replace the registry contents with a persisted session.
    ///
    /// Missing ids, titles, themes and shell fields are defaulted. Returns the
    /// number of restored tabs; an empty record leaves the registry untouched.
    pub fn restore(&mut self, record: SessionRecord) -> usize {
        let SessionRecord {
            tabs: mut entries,
            active_tab_id,
        } = record;
        if entries.is_empty() {
            return 0;
        }
        if entries.len() > MAX_TABS {
            warn!(
                count = entries.len(),
                max = MAX_TABS,
                "Persisted session exceeds tab limit; dropping extra tabs"
            );
            entries.truncate(MAX_TABS);
        }

        self.allocator.fast_forward(
            entries.len(),
            entries.iter().filter_map(|entry| entry.id.as_deref()),
        );

        let created_at = Utc::now();
        let restored_ids: HashSet<String> =
            entries.iter().filter_map(|entry| entry.id.clone()).collect();
        let mut seen = HashSet::with_capacity(entries.len());
        let mut tabs = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let id = match entry.id.filter(|id| !id.is_empty() && !seen.contains(id)) {
                Some(id) => id,
                None => fresh_id(&mut self.allocator, |id| restored_ids.contains(id)),
            };
            seen.insert(id.clone());

            let title = entry
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| default_title(index));
            let color_theme = entry
                .color_theme
                .filter(|theme| !theme.is_empty())
                .unwrap_or_else(|| theme_at(index).to_string());
            let shell_config = match entry.shell_config {
                Some(shell) => shell.resolve(&self.default_shell),
                None => self.default_shell.clone(),
            };

            tabs.push(Tab {
                id,
                title,
                shell_config,
                color_theme,
                created_at,
            });
        }

        let active = active_tab_id
            .filter(|id| tabs.iter().any(|tab| &tab.id == id))
            .or_else(|| tabs.first().map(|tab| tab.id.clone()));

        let count = tabs.len();
        self.tabs = tabs;
        self.active_tab_id = active;
        count
    }

    /// Open the persistence gate. Returns true only on the first call.
    pub fn mark_session_loaded(&mut self) -> bool {
        !std::mem::replace(&mut self.session_loaded, true)
    }

    /// Project the registry onto the persisted wire shape.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord::from_tabs(&self.tabs, self.active_tab_id.as_deref())
    }

    fn build_tab(&mut self, shell: Option<ShellConfig>) -> Tab {
        let tabs = &self.tabs;
        Tab {
            id: fresh_id(&mut self.allocator, |id| tabs.iter().any(|tab| tab.id == id)),
            title: default_title(self.tabs.len()),
            shell_config: shell.unwrap_or_else(|| self.default_shell.clone()),
            color_theme: self.allocator.next_theme().to_string(),
            created_at: Utc::now(),
        }
    }

    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == tab_id)
    }

    fn update_field(
        &mut self,
        tab_id: &str,
        field: &'static str,
        apply: impl FnOnce(&mut Tab) -> bool,
    ) -> bool {
        match self.tabs.iter_mut().find(|tab| tab.id == tab_id) {
            Some(tab) => apply(tab),
            None => {
                debug!(tab_id, field, "Update ignored: tab not found");
                false
            }
        }
    }
}

/// Next allocator id not already claimed by a restored tab.
fn fresh_id(allocator: &mut TabAllocator, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = allocator.next_id();
        if !taken(&id) {
            return id;
        }
    }
}

fn default_title(index: usize) -> String {
    format!("Terminal {}", index + 1)
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
