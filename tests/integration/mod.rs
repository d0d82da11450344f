//! Integration tests for tabdeck
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod http_store;
pub mod session_restore;
pub mod tab_lifecycle;
