//! Wire types for `POST /api/interviewer`, shared by the server and the client.

use serde::{Deserialize, Serialize};

/// Sampling temperature applied when the caller omits one.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Request body. Built fresh for every call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub job_description: String,
    pub resume_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl GenerationRequest {
    pub fn new(job_description: impl Into<String>, resume_text: impl Into<String>) -> Self {
        Self {
            job_description: job_description.into(),
            resume_text: resume_text.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Temperature to send to the model, falling back to the server default.
    pub fn effective_temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }
}

/// Success body: the model's raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    pub ai_response: String,
}
