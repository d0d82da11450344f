//! Shared test utilities for tabdeck
//!
//! - Temporary SQLite session stores
//! - A web host bound to an ephemeral port

pub mod fixtures;

pub use fixtures::{TempSqliteStore, TestHost};
