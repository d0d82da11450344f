//! Session persistence bridge.
//!
//! Restores the registry from the session store exactly once, then mirrors
//! every registry change back to the store through a single-slot debounce
//! timer. Nothing is written until the restore attempt has finished, so a
//! transient default tab can never clobber a persisted session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{SessionStore, SessionStoreError};
use crate::tabs::TabManager;

/// Quiet period before a scheduled save fires.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Result of the one-shot restore attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The registry was replaced with this many persisted tabs
    Restored { tabs: usize },
    /// Nothing was stored; the default tab stays
    Empty,
    /// The store failed; the default tab stays
    Failed,
    /// Another caller already ran (or is running) the restore
    AlreadyAttempted,
}

pub struct PersistenceBridge {
    manager: TabManager,
    store: Arc<dyn SessionStore>,
    debounce: Duration,
    restore_started: AtomicBool,
}

impl PersistenceBridge {
    pub fn new(manager: TabManager, store: Arc<dyn SessionStore>) -> Self {
        Self {
            manager,
            store,
            debounce: SAVE_DEBOUNCE,
            restore_started: AtomicBool::new(false),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Run the restore procedure. Only the first call does any work.
    ///
    /// Whatever the store answers, the session gate is open afterwards.
    pub async fn restore(&self) -> RestoreOutcome {
        if self.restore_started.swap(true, Ordering::SeqCst) {
            return RestoreOutcome::AlreadyAttempted;
        }

        let outcome = match self.store.load().await {
            Ok(Some(record)) if !record.is_empty() => {
                let tabs = self.manager.restore_from(record);
                info!(tabs, "Restored persisted session");
                RestoreOutcome::Restored { tabs }
            }
            Ok(_) => {
                debug!("No persisted session; keeping default tab");
                RestoreOutcome::Empty
            }
            Err(e) => {
                warn!(error = %e, "Failed to restore session; keeping default tab");
                RestoreOutcome::Failed
            }
        };

        self.manager.mark_session_loaded();
        outcome
    }

    /// Write the current registry to the store right away.
    ///
    /// Skipped while the session gate is closed.
    pub async fn save_now(&self) -> Result<(), SessionStoreError> {
        if !self.manager.is_session_loaded() {
            debug!("Save skipped: session not loaded yet");
            return Ok(());
        }
        let record = self.manager.session_record();
        self.store.save(&record).await?;
        debug!(tabs = record.tabs.len(), "Session saved");
        Ok(())
    }

    async fn save(&self) {
        if let Err(e) = self.save_now().await {
            warn!(error = %e, "Failed to save session");
        }
    }

    /// Restore, then persist changes until `shutdown` fires.
    ///
    /// A save still pending at shutdown is flushed instead of dropped.
    pub async fn run(&self, shutdown: CancellationToken) {
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = async {
                self.restore().await;
                self.manager.wait_until_loaded().await;
            } => {}
        }

        let mut changes = self.manager.subscribe();
        // Opening the gate counts as a change: the loaded state is written once.
        let mut pending = true;

        loop {
            if pending {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        self.save().await;
                        break;
                    }
                    changed = changes.changed() => {
                        if changed.is_err() {
                            self.save().await;
                            break;
                        }
                        // loop around: the timer restarts from now
                    }
                    _ = tokio::time::sleep(self.debounce) => {
                        pending = false;
                        self.save().await;
                    }
                }
            } else {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    changed = changes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        pending = true;
                    }
                }
            }
        }

        debug!("Persistence bridge stopped");
    }

    /// Spawn [`run`](Self::run) on the current runtime.
    pub fn spawn(self: Arc<Self>, shutdown: CancellationToken) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run(shutdown).await })
    }
}
