use crate::core::Storage;
use crate::utils::error::PortalError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path};

pub const NOT_FOUND_BODY: &str = "<html><body><h1>404 Not Found</h1></body></html>";

/// Maps a request path onto a path relative to the web root.
///
/// `/` resolves to the index file. Anything that would climb out of the root
/// (`..`, absolute or drive-prefixed segments) resolves to `None`.
pub fn resolve_request_path(request_path: &str, index_file: &str) -> Option<String> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() { index_file } else { trimmed };

    let mut parts = Vec::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

pub fn content_type_for(file_name: &str) -> &'static str {
    if file_name.ends_with(".html") {
        "text/html"
    } else if file_name.ends_with(".css") {
        "text/css"
    } else if file_name.ends_with(".js") {
        "application/javascript"
    } else if file_name.ends_with(".png") {
        "image/png"
    } else if file_name.ends_with(".jpg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html")],
        NOT_FOUND_BODY,
    )
        .into_response()
}

pub async fn serve_file<S: Storage>(storage: &S, request_path: &str, index_file: &str) -> Response {
    let Some(relative) = resolve_request_path(request_path, index_file) else {
        tracing::debug!("Rejected request path: {}", request_path);
        return not_found();
    };

    match storage.read_file(&relative).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&relative))],
            body,
        )
            .into_response(),
        Err(PortalError::FileNotFound { path }) => {
            tracing::debug!("Static file not found: {}", path);
            not_found()
        }
        Err(e) => {
            tracing::warn!("Failed to read static file {}: {}", relative, e);
            not_found()
        }
    }
}
