//! Static asset responder for the browser client.

use std::path::{Component, Path, PathBuf};

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

const INDEX_FILE: &str = "index.html";

/// Map a file extension to its content type.
///
/// Unknown or missing extensions fall back to HTML.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "text/html",
    }
}

/// Resolve a request path beneath `public_dir`.
///
/// `/` maps to the index page. Returns `None` for paths that try to leave
/// the public directory.
pub fn resolve(public_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    if relative.is_empty() {
        return Some(public_dir.join(INDEX_FILE));
    }

    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(public_dir.join(relative))
}

/// Serve `request_path` from `public_dir`
pub async fn serve_static(public_dir: &Path, request_path: &str) -> Response {
    let Some(path) = resolve(public_dir, request_path) else {
        tracing::warn!("Rejected static path '{}'", request_path);
        return not_found();
    };

    let is_file = tokio::fs::metadata(&path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);
    if !is_file {
        tracing::debug!("Static file not found: {}", path.display());
        return not_found();
    }

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", path.display(), e);
            return not_found();
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type_for(&path))],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "404 Not Found",
    )
        .into_response()
}
