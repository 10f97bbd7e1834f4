mod error;
mod handlers;
mod routes;
mod state;

pub use state::AppState;

use crate::Config;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router for the given state.
pub fn router(state: Arc<AppState>) -> Router {
    // The frame front-end may be hosted anywhere on the local network, so
    // every origin, method, and header is allowed. This is not a security
    // boundary.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::image_routes(&state.config.pictures.mount_prefix))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config) -> Result<()> {
    let state = Arc::new(AppState::new(config));
    let addr = state.config.addr();

    let app = router(state);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
