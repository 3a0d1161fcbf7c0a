//! Axum route handler for the interviewer API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::generate_questions;
use crate::models::interview::{AiResponse, GenerationRequest};
use crate::state::AppState;

/// POST /api/interviewer
///
/// Checks the gateway bindings before touching the body, then makes exactly
/// one model call. Every failure renders as a 500 `{ error, details }` envelope.
pub async fn handle_interviewer(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<AiResponse>, AppError> {
    let generator = state.generator.as_ref().ok_or(AppError::MissingConfig)?;

    let Json(request) = payload.map_err(|e| AppError::InvalidPayload(e.body_text()))?;

    let ai_response = generate_questions(generator.as_ref(), &request).await?;

    Ok(Json(AiResponse { ai_response }))
}
