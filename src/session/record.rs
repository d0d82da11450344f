//! Persisted session wire shape.
//!
//! Every field is optional on the way in so that partially written or older
//! records still restore; missing values are defaulted by the registry.

use serde::{Deserialize, Serialize};

use crate::tabs::{ShellConfig, Tab};

/// The stored session: ordered tabs plus the active tab id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub tabs: Vec<SessionTabRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTabRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_config: Option<ShellConfigRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfigRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wsl_distro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wsl_home_path: Option<String>,
}

impl SessionRecord {
    pub fn from_tabs(tabs: &[Tab], active_tab_id: Option<&str>) -> Self {
        Self {
            tabs: tabs.iter().map(SessionTabRecord::from).collect(),
            active_tab_id: active_tab_id.map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl From<&Tab> for SessionTabRecord {
    fn from(tab: &Tab) -> Self {
        Self {
            id: Some(tab.id.clone()),
            title: Some(tab.title.clone()),
            shell_config: Some(ShellConfigRecord::from(&tab.shell_config)),
            color_theme: Some(tab.color_theme.clone()),
        }
    }
}

impl ShellConfigRecord {
    /// Fill missing fields from `defaults`.
    pub fn resolve(self, defaults: &ShellConfig) -> ShellConfig {
        ShellConfig {
            shell_type: self
                .shell_type
                .unwrap_or_else(|| defaults.shell_type.clone()),
            wsl_distro: self
                .wsl_distro
                .unwrap_or_else(|| defaults.wsl_distro.clone()),
            wsl_home_path: self
                .wsl_home_path
                .unwrap_or_else(|| defaults.wsl_home_path.clone()),
        }
    }
}

impl From<&ShellConfig> for ShellConfigRecord {
    fn from(shell: &ShellConfig) -> Self {
        Self {
            shell_type: Some(shell.shell_type.clone()),
            wsl_distro: Some(shell.wsl_distro.clone()),
            wsl_home_path: Some(shell.wsl_home_path.clone()),
        }
    }
}
