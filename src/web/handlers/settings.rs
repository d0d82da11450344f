//! Theme palette and default shell configuration handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::save_shell_config_to;
use crate::tabs::{ShellConfig, THEME_PALETTE};
use crate::web::error::WebError;
use crate::web::state::WebAppState;

#[derive(Debug, Serialize)]
pub struct ThemesResponse {
    pub themes: Vec<&'static str>,
}

/// The tab color palette, in assignment order.
pub async fn list_themes() -> Json<ThemesResponse> {
    Json(ThemesResponse {
        themes: THEME_PALETTE.to_vec(),
    })
}

pub async fn get_shell_config(State(state): State<WebAppState>) -> Json<ShellConfig> {
    Json(state.tabs().default_shell_config())
}

/// Change the shell used for new tabs and write it to the config file.
pub async fn set_shell_config(
    State(state): State<WebAppState>,
    Json(shell): Json<ShellConfig>,
) -> Result<Json<ShellConfig>, WebError> {
    if shell.shell_type.trim().is_empty() {
        return Err(WebError::BadRequest("shellType must not be empty".to_string()));
    }

    if let Some(path) = state.config_file() {
        save_shell_config_to(path, &shell)
            .map_err(|e| WebError::Internal(format!("Failed to save config: {}", e)))?;
    }
    state.tabs().set_default_shell_config(shell.clone());

    Ok(Json(shell))
}
