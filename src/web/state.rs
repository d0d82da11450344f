//! Shared state handed to every request handler.

use std::path::PathBuf;
use std::sync::Arc;

use crate::session::SessionStore;
use crate::tabs::TabManager;

#[derive(Clone)]
pub struct WebAppState {
    tabs: TabManager,
    session_store: Arc<dyn SessionStore>,
    config_file: Option<PathBuf>,
}

impl WebAppState {
    pub fn new(tabs: TabManager, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            tabs,
            session_store,
            config_file: None,
        }
    }

    /// Persist default-shell changes into this config file.
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session_store
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }
}
