//! Session store backed by the host's SQLite app-state table.

use async_trait::async_trait;

use super::{SessionRecord, SessionStore, SessionStoreError};
use crate::data::AppStateStore;

/// Key under which the session record is stored in `app_state`.
pub const SESSION_KEY: &str = "session";

/// Stores the session record as JSON in the `app_state` key/value table.
#[derive(Clone)]
pub struct SqliteSessionStore {
    app_state: AppStateStore,
}

impl SqliteSessionStore {
    pub fn new(app_state: AppStateStore) -> Self {
        Self { app_state }
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, SessionStoreError>
    where
        T: Send + 'static,
        F: FnOnce(AppStateStore) -> Result<T, SessionStoreError> + Send + 'static,
    {
        let app_state = self.app_state.clone();
        tokio::task::spawn_blocking(move || f(app_state))
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn load(&self) -> Result<Option<SessionRecord>, SessionStoreError> {
        self.blocking(|app_state| match app_state.get(SESSION_KEY)? {
            Some(raw) => Ok(serde_json::from_str::<Option<SessionRecord>>(&raw)?),
            None => Ok(None),
        })
        .await
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string(record)?;
        self.blocking(move |app_state| {
            app_state.set(SESSION_KEY, &raw)?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Database;
    use crate::session::SessionTabRecord;
    use tempfile::tempdir;

    fn setup() -> (tempfile::TempDir, AppStateStore, SqliteSessionStore) {
        let dir = tempdir().unwrap();
        let db = Database::open(dir.path().join("test.db")).unwrap();
        let app_state = AppStateStore::new(db.connection());
        let store = SqliteSessionStore::new(app_state.clone());
        (dir, app_state, store)
    }

    #[tokio::test]
    async fn test_load_absent_session() {
        let (_dir, _app_state, store) = setup();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_replaces_record() {
        let (_dir, _app_state, store) = setup();
        let first = SessionRecord {
            tabs: vec![SessionTabRecord {
                id: Some("tab-1".to_string()),
                ..SessionTabRecord::default()
            }],
            active_tab_id: Some("tab-1".to_string()),
        };
        let second = SessionRecord {
            tabs: vec![SessionTabRecord {
                id: Some("tab-9".to_string()),
                title: Some("logs".to_string()),
                ..SessionTabRecord::default()
            }],
            active_tab_id: Some("tab-9".to_string()),
        };

        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_stored_null_is_absent() {
        let (_dir, app_state, store) = setup();
        app_state.set(SESSION_KEY, "null").unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let (_dir, app_state, store) = setup();
        app_state.set(SESSION_KEY, "{not json").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, SessionStoreError::Malformed(_)));
    }
}
