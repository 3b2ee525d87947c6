use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Error bodies are a flat `{"error": <message>}` object. Server-side causes
/// (database, LLM, internal) are logged and collapsed into generic messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Email and password required")]
    InvalidInput,

    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No content provided")]
    NoContent,

    #[error("Gemini API key not set")]
    Configuration,

    #[error("Invalid form data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DuplicateUser => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::NoContent => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Configuration => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Multipart(e) => {
                tracing::warn!("Malformed multipart request: {e}");
                (StatusCode::BAD_REQUEST, "Invalid form data".to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
