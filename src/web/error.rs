use crate::services::catalog::ScanError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Error envelope for the HTTP surface. Every failure renders as
/// `{"detail": ...}` with the matching status code.
pub struct AppError {
    status: StatusCode,
    detail: String,
}

impl AppError {
    /// Misses and containment violations look identical to the caller;
    /// nothing outside the picture root is ever revealed.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: "Not Found".to_string(),
        }
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        tracing::error!("catalog scan failed: {err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
