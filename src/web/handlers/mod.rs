//! HTTP request handlers for the tabdeck web API.

pub mod session;
pub mod settings;
pub mod tabs;
