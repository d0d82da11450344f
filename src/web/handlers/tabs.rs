//! Tab State API handlers.
//!
//! Lookups that miss (unknown tab id, out-of-range index) are absorbed by the
//! tab manager, so those endpoints answer 204 either way; only create can fail.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::tabs::{ShellConfig, Tab, TabsSnapshot};
use crate::web::error::WebError;
use crate::web::state::WebAppState;

/// Request to create a new tab.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTabRequest {
    pub shell_config: Option<ShellConfig>,
}

/// Request to update fields of an existing tab.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTabRequest {
    pub title: Option<String>,
    pub shell_config: Option<ShellConfig>,
    pub color_theme: Option<String>,
}

/// Request to move a tab to a new position.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTabsRequest {
    pub from_index: usize,
    pub to_index: usize,
}

/// Current tabs, active tab and session gate state.
pub async fn list_tabs(State(state): State<WebAppState>) -> Json<TabsSnapshot> {
    Json(state.tabs().snapshot())
}

/// Create a tab and make it active. The request body is optional.
pub async fn create_tab(
    State(state): State<WebAppState>,
    req: Option<Json<CreateTabRequest>>,
) -> Result<(StatusCode, Json<Tab>), WebError> {
    let shell_config = req.and_then(|Json(req)| req.shell_config);
    let tab = state.tabs().create_tab(shell_config)?;
    Ok((StatusCode::CREATED, Json(tab)))
}

/// Close a tab. The last tab is never closed.
pub async fn close_tab(State(state): State<WebAppState>, Path(id): Path<String>) -> StatusCode {
    state.tabs().close_tab(&id);
    StatusCode::NO_CONTENT
}

pub async fn activate_tab(
    State(state): State<WebAppState>,
    Path(id): Path<String>,
) -> StatusCode {
    state.tabs().switch_tab(&id);
    StatusCode::NO_CONTENT
}

/// Update title, shell config and/or color theme of a tab.
pub async fn update_tab(
    State(state): State<WebAppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTabRequest>,
) -> Result<StatusCode, WebError> {
    if req.title.is_none() && req.shell_config.is_none() && req.color_theme.is_none() {
        return Err(WebError::BadRequest(
            "Expected at least one of title, shellConfig, colorTheme".to_string(),
        ));
    }

    let tabs = state.tabs();
    if let Some(title) = req.title {
        tabs.update_tab_title(&id, title);
    }
    if let Some(shell_config) = req.shell_config {
        tabs.update_tab_shell_config(&id, shell_config);
    }
    if let Some(color_theme) = req.color_theme {
        tabs.update_tab_color_theme(&id, color_theme);
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn reorder_tabs(
    State(state): State<WebAppState>,
    Json(req): Json<ReorderTabsRequest>,
) -> StatusCode {
    state.tabs().reorder_tabs(req.from_index, req.to_index);
    StatusCode::NO_CONTENT
}
