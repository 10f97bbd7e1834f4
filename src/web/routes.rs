use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::api::service_info))
        .route("/api/photosets", get(handlers::api::list_photo_sets))
        .route("/api/refresh", get(handlers::api::refresh))
}

pub fn image_routes(mount_prefix: &str) -> Router<Arc<AppState>> {
    Router::new().route(
        &format!("{mount_prefix}/*path"),
        get(handlers::images::serve_image),
    )
}
