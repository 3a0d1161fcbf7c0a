//! Builds the two-message prompt and makes the single model call.

use tracing::debug;

use crate::errors::AppError;
use crate::generation::prompts::{build_user_prompt, SYSTEM_PROMPT};
use crate::llm_client::{ChatMessage, ChatRequest, TextGenerator, MAX_TOKENS};
use crate::models::interview::GenerationRequest;

/// Assembles the model request for a generation call.
pub fn build_chat_request(request: &GenerationRequest) -> ChatRequest {
    ChatRequest {
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(
                &request.job_description,
                &request.resume_text,
            )),
        ],
        temperature: request.effective_temperature(),
        max_tokens: MAX_TOKENS,
    }
}

/// Generates interview questions. The model text is returned unmodified;
/// the five-question format is requested by the prompt, not checked here.
pub async fn generate_questions(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<String, AppError> {
    let chat = build_chat_request(request);
    let text = generator.generate(&chat).await?;
    debug!(
        "Generated {} chars at temperature {}",
        text.len(),
        chat.temperature
    );
    Ok(text)
}
