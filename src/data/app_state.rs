//! App state data access object (key-value store)

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::Arc;

/// Data access object for app state (key-value store)
#[derive(Clone)]
pub struct AppStateStore {
    conn: Arc<Mutex<Connection>>,
}

impl AppStateStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Set a value (insert or update)
    pub fn set(&self, key: &str, value: &str) -> SqliteResult<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> SqliteResult<Option<String>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT value FROM app_state WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }
}
