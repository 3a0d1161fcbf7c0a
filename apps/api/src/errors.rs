use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Top-level message carried by every failure envelope.
pub const GENERATION_FAILED: &str = "Failed to generate response";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Required environment variables are not set")]
    MissingConfig,

    #[error("{0}")]
    InvalidPayload(String),

    #[error("{0}")]
    Llm(#[from] LlmError),
}

/// Failure body returned by `/api/interviewer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let details = self.to_string();
        tracing::error!("Generation failed: {details}");

        let body = Json(ErrorResponse {
            error: GENERATION_FAILED.to_string(),
            details,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
