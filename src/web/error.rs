//! Web error types for the tabdeck host.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::session::SessionStoreError;
use crate::tabs::TabError;

/// Error type for web API operations.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Bad request with validation error.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Tab lifecycle rejection (capacity exhausted).
    #[error(transparent)]
    Tab(#[from] TabError),

    /// Session store read or write failed.
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message, code, details) = match &self {
            WebError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                None,
                Some(msg.clone()),
            ),
            WebError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    None,
                    None,
                )
            }
            WebError::Tab(e) => (
                StatusCode::CONFLICT,
                "Conflict",
                Some(e.code()),
                Some(e.to_string()),
            ),
            WebError::SessionStore(e) => {
                tracing::warn!("Session store error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Session Store Unavailable",
                    None,
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
            code,
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        WebError::Internal(err.to_string())
    }
}
