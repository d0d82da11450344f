//! Session persistence: the stored record shape, the store seam with its
//! SQLite, HTTP and in-memory implementations, and the bridge that keeps a
//! [`TabManager`](crate::tabs::TabManager) and a store in sync.

mod bridge;
mod http;
mod record;
mod sqlite;
mod store;

pub use bridge::{PersistenceBridge, RestoreOutcome, SAVE_DEBOUNCE};
pub use http::HttpSessionStore;
pub use record::{SessionRecord, SessionTabRecord, ShellConfigRecord};
pub use sqlite::{SqliteSessionStore, SESSION_KEY};
pub use store::{MemorySessionStore, SessionStore, SessionStoreError};
