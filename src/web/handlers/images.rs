use crate::web::error::{AppError, AppResult};
use crate::web::state::AppState;
use axum::extract::{Path as UrlPath, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path};
use std::sync::Arc;

/// Images are immutable once on disk; let the frame cache them for a day.
const CACHE_CONTROL: &str = "public, max-age=86400";

/// GET {mount_prefix}/*path
pub async fn serve_image(
    State(state): State<Arc<AppState>>,
    UrlPath(path): UrlPath<String>,
) -> AppResult<Response> {
    // Only plain `set/file` components may address an image; parent, root,
    // or prefix components never resolve.
    let relative = Path::new(&path);
    let plain = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !plain || path.contains('\\') {
        return Err(AppError::not_found());
    }

    // Resolve symlinks before the containment check so a link cannot point
    // outside the picture root.
    let canonical_root = state
        .pictures_dir
        .canonicalize()
        .map_err(|_| AppError::not_found())?;
    let canonical_file = state
        .pictures_dir
        .join(relative)
        .canonicalize()
        .map_err(|_| AppError::not_found())?;
    if !canonical_file.starts_with(&canonical_root) || !canonical_file.is_file() {
        return Err(AppError::not_found());
    }

    let content = tokio::fs::read(&canonical_file)
        .await
        .map_err(|_| AppError::not_found())?;
    let mime = mime_guess::from_path(&canonical_file).first_or_octet_stream();

    Ok((
        [
            (header::CONTENT_TYPE, mime.as_ref()),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        content,
    )
        .into_response())
}
