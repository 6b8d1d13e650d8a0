use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Shown when a submission arrives with a blank topic.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic for your post";
/// The single user-facing message for every network, API, or parsing failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating posts. Please try again.";
pub const CLIPBOARD_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Carries the underlying cause for logs. Users only ever see
    /// [`GENERATION_FAILED_MESSAGE`].
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The message a user should see for this error, with causes stripped.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::Generation(_) => GENERATION_FAILED_MESSAGE.to_string(),
            AppError::Clipboard(_) => CLIPBOARD_FAILED_MESSAGE.to_string(),
            AppError::Storage(_) => "Failed to save preferences".to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Generation(cause) => {
                tracing::error!("Generation error: {cause}");
                (StatusCode::BAD_GATEWAY, "GENERATION_ERROR")
            }
            AppError::Clipboard(cause) => {
                tracing::warn!("Clipboard error: {cause}");
                (StatusCode::INTERNAL_SERVER_ERROR, "CLIPBOARD_ERROR")
            }
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Storage(cause) => {
                tracing::error!("Storage error: {cause}");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
