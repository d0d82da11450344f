//! Session store endpoint: the raw persisted record, read and replaced wholesale.

use axum::{extract::State, http::StatusCode, Json};

use crate::session::SessionRecord;
use crate::web::error::WebError;
use crate::web::state::WebAppState;

/// Return the stored session record, or `null` when nothing was stored.
pub async fn get_session(
    State(state): State<WebAppState>,
) -> Result<Json<Option<SessionRecord>>, WebError> {
    let record = state.session_store().load().await?;
    Ok(Json(record))
}

/// Replace the stored session record.
pub async fn put_session(
    State(state): State<WebAppState>,
    Json(record): Json<SessionRecord>,
) -> Result<StatusCode, WebError> {
    state.session_store().save(&record).await?;
    tracing::debug!(tabs = record.tabs.len(), "Session record replaced via API");
    Ok(StatusCode::NO_CONTENT)
}
