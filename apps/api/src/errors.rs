use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// The only message ever sent to clients on failure.
pub const CATEGORIZE_FAILED: &str = "Failed to categorize transaction";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders the same 500 body; the detail only reaches the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => tracing::warn!("Rejected request: {msg}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
        }

        let body = Json(json!({ "error": CATEGORIZE_FAILED }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
