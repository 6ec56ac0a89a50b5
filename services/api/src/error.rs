//! Maps request failures to HTTP status codes and a JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thinu_core::HandlerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Handler(#[from] HandlerError),
    #[error("Malformed request body: {0}")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Handler(HandlerError::MissingApplicationId)
            | AppError::Handler(HandlerError::UnsupportedApplication(_)) => {
                (StatusCode::FORBIDDEN, "UNSUPPORTED_APPLICATION")
            }
            AppError::Handler(HandlerError::MissingSession) => {
                (StatusCode::BAD_REQUEST, "MISSING_SESSION")
            }
            AppError::Body(_) => (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST"),
        };

        let body = json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
