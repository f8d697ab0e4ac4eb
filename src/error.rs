use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, *m),
            AppError::Internal(err) => {
                // The generic message never leaks the underlying cause.
                tracing::error!(%err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate QR code")
            }
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}
