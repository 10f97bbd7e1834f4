use crate::models::PhotoSet;
use crate::services::catalog;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /
pub async fn service_info() -> Json<Value> {
    Json(json!({ "message": "Photo Frame API" }))
}

/// GET /api/photosets
pub async fn list_photo_sets(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<PhotoSet>>> {
    let sets = catalog::scan_photo_sets(&state.pictures_dir, &state.config.pictures.mount_prefix)?;
    Ok(Json(sets))
}

/// GET /api/refresh
///
/// The catalog is recomputed on every listing call, so there is nothing to
/// invalidate here; the endpoint acknowledges the request for clients that
/// expect a refresh hook.
pub async fn refresh() -> Json<Value> {
    Json(json!({ "status": "success", "message": "Refresh triggered" }))
}
