//! LLM Client: the single point of entry for all model calls.
//!
//! Requests go to a Workers AI text-generation model through an AI Gateway.
//! Gateway caching is skipped on every call so each request draws a fresh sample.
//!
//! Model: llama-3.1-70b-instruct (hardcoded, not configurable)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::GatewayConfig;

/// The model used for all generation calls.
pub const MODEL: &str = "@cf/meta/llama-3.1-70b-instruct";
pub const MAX_TOKENS: u32 = 2048;
/// Gateway cache TTL sent alongside the skip-cache flag.
const CACHE_TTL: &str = "3600000";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No response received from AI")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body sent to the text-generation model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Anything that can turn a chat request into generated text.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Deserialize)]
struct GatewayResponse {
    #[serde(default = "default_success")]
    success: bool,
    result: Option<GatewayResult>,
    #[serde(default)]
    errors: Vec<GatewayErrorBody>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct GatewayResult {
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    message: String,
}

/// Workers AI client routed through an AI Gateway.
#[derive(Clone)]
pub struct WorkersAiClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl WorkersAiClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: format!(
                "{}/{}/{}/workers-ai/{}",
                config.base_url, config.account_id, config.gateway_id, MODEL
            ),
            api_token: config.api_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for WorkersAiClient {
    /// Makes one call to the model. No retries.
    async fn generate(&self, request: &ChatRequest) -> Result<String, LlmError> {
        debug!(
            "Calling {} (temperature={}, max_tokens={})",
            MODEL, request.temperature, request.max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .header("cf-aig-skip-cache", "true")
            .header("cf-aig-cache-ttl", CACHE_TTL)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GatewayResponse>(&body)
                .ok()
                .and_then(|r| r.errors.into_iter().next())
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GatewayResponse = serde_json::from_str(&body)?;
        if !parsed.success {
            return Err(match parsed.errors.into_iter().next() {
                Some(e) => LlmError::Api {
                    status: status.as_u16(),
                    message: e.message,
                },
                None => LlmError::EmptyContent,
            });
        }

        match parsed.result.and_then(|r| r.response) {
            Some(text) if !text.is_empty() => {
                debug!("Model call succeeded: {} chars", text.len());
                Ok(text)
            }
            _ => match parsed.errors.into_iter().next() {
                Some(e) => Err(LlmError::Api {
                    status: status.as_u16(),
                    message: e.message,
                }),
                None => Err(LlmError::EmptyContent),
            },
        }
    }
}
