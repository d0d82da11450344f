//! Web host: embedded UI bundle, Tab State API and session store endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::WebError;
pub use server::{build_router, run_server, serve, shutdown_signal, ServerConfig};
pub use state::WebAppState;
