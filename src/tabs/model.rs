//! Tab data types shared by the registry, the persistence bridge and the web surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shell launch settings carried by a tab.
///
/// Opaque to the tab lifecycle: passed through to the terminal surface unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub shell_type: String,
    pub wsl_distro: String,
    pub wsl_home_path: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let shell_type = if cfg!(windows) { "powershell" } else { "bash" };
        Self {
            shell_type: shell_type.to_string(),
            wsl_distro: String::new(),
            wsl_home_path: String::new(),
        }
    }
}

/// A terminal session descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Unique for the lifetime of the manager, never reused
    pub id: String,
    pub title: String,
    pub shell_config: ShellConfig,
    /// Palette theme name
    pub color_theme: String,
    /// Advisory only; not persisted and never used for ordering
    pub created_at: DateTime<Utc>,
}

/// Errors surfaced by tab lifecycle operations.
///
/// Unknown tab ids and out-of-range indices are absorbed as no-ops, so the only
/// failure a caller ever sees is capacity exhaustion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("Maximum of {max} tabs reached")]
    MaxTabsReached { max: usize },
}

impl TabError {
    /// Stable machine-readable code for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            TabError::MaxTabsReached { .. } => "MAX_TABS_REACHED",
        }
    }
}

/// Read-only view of the registry handed to consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsSnapshot {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<String>,
    pub active_tab: Option<Tab>,
    pub session_loaded: bool,
    pub max_tabs: usize,
}
