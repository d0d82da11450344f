//! REST API route definitions.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::web::handlers::{session, settings, tabs};
use crate::web::state::WebAppState;

/// Build the API router with all REST endpoints.
pub fn api_routes() -> Router<WebAppState> {
    Router::new()
        // Tab state routes
        .route("/tabs", get(tabs::list_tabs).post(tabs::create_tab))
        .route("/tabs/reorder", post(tabs::reorder_tabs))
        .route(
            "/tabs/{id}",
            patch(tabs::update_tab).delete(tabs::close_tab),
        )
        .route("/tabs/{id}/activate", post(tabs::activate_tab))
        // Session store routes
        .route(
            "/session",
            get(session::get_session).put(session::put_session),
        )
        // Settings routes
        .route("/themes", get(settings::list_themes))
        .route(
            "/config/shell",
            get(settings::get_shell_config).put(settings::set_shell_config),
        )
}
