//! Data persistence layer for tabdeck
//!
//! This module provides SQLite-based storage for host-side application state.

mod app_state;
mod database;
mod migrations;

pub use app_state::AppStateStore;
pub use database::{Database, DatabaseError};
