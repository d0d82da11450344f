//! Embedded web bundle.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "web/dist/"]
struct WebAssets;

/// Serve the single-page app entry point.
pub async fn serve_index() -> Response {
    serve_embedded("index.html")
}

/// Serve a file from the bundle's `assets/` directory.
pub async fn serve_static_file(Path(path): Path<String>) -> Response {
    serve_embedded(&format!("assets/{}", path))
}

fn serve_embedded(path: &str) -> Response {
    match WebAssets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.essence_str().to_string())],
                file.data,
            )
                .into_response()
        }
        None => {
            tracing::debug!(path, "Embedded asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
