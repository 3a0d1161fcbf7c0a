//! Transport between the client and `POST /api/interviewer`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::client::error::ClientError;
use crate::errors::ErrorResponse;
use crate::models::interview::{AiResponse, GenerationRequest};

/// One generation round trip. Implementations make exactly one request per call.
#[async_trait]
pub trait InterviewerApi: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ClientError>;
}

/// Talks to a running interviewer server over HTTP.
#[derive(Clone)]
pub struct HttpInterviewerApi {
    client: Client,
    endpoint: String,
}

impl HttpInterviewerApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/interviewer", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl InterviewerApi for HttpInterviewerApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                debug!("Request to {} failed: {e}", self.endpoint);
                ClientError::Http(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let details = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .map(|e| e.details)
                .filter(|d| !d.is_empty());
            return Err(ClientError::Server {
                status: status.as_u16(),
                details,
            });
        }

        let parsed: AiResponse = serde_json::from_str(&body).map_err(|e| {
            debug!("Undecodable response from {}: {e}", self.endpoint);
            ClientError::Parse(e)
        })?;
        Ok(parsed.ai_response)
    }
}
