use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::form::photo::PhotoError;
use crate::form::validation::ValidationReport;
use crate::form::FormError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Photo(#[from] PhotoError),

    /// The export gate refused: required fields are empty.
    #[error("{} required field(s) are empty", .0.invalid.len())]
    IncompleteForm(ValidationReport),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Form(e @ FormError::EntryNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string())
            }
            AppError::Form(e) => (StatusCode::BAD_REQUEST, "INVALID_FIELD", e.to_string()),
            AppError::Photo(e) => {
                tracing::warn!("Photo rejected: {e:?}");
                (StatusCode::BAD_REQUEST, "PHOTO_REJECTED", e.to_string())
            }
            AppError::IncompleteForm(report) => {
                let body = Json(json!({
                    "error": {
                        "code": "INCOMPLETE_FORM",
                        "message": self.to_string(),
                        "report": report,
                    }
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
