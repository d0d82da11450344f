//! Session store abstraction.

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use super::SessionRecord;

/// Failures talking to a session store.
///
/// These are never surfaced to tab lifecycle callers: the persistence bridge
/// logs them and keeps the in-memory registry as the source of truth.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// External key/value collaborator holding one session record.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The most recently written record, or `None` if nothing was stored.
    async fn load(&self) -> Result<Option<SessionRecord>, SessionStoreError>;

    /// Replace the stored record wholesale.
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError>;
}

/// In-process store, used when embedding the manager without a host and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<SessionRecord>, SessionStoreError> {
        Ok(self.record.lock().clone())
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        *self.record.lock() = Some(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionTabRecord;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        let record = SessionRecord {
            tabs: vec![SessionTabRecord {
                id: Some("tab-1".to_string()),
                ..SessionTabRecord::default()
            }],
            active_tab_id: Some("tab-1".to_string()),
        };
        store.save(&record).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(record));
    }
}
