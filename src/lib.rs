pub mod config;
pub mod data;
pub mod session;
pub mod tabs;
pub mod util;
pub mod web;

pub use config::Config;
pub use data::{AppStateStore, Database};
pub use session::{
    HttpSessionStore, MemorySessionStore, PersistenceBridge, SessionRecord, SessionStore,
    SqliteSessionStore,
};
pub use tabs::{ShellConfig, Tab, TabError, TabManager, MAX_TABS};
pub use web::{ServerConfig, WebAppState};
