use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please provide both job description and resume text";
pub const MISSING_SESSION_MESSAGE: &str =
    "Job description and resume are required to generate new questions";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate questions";

/// Client-side failures. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("{}", MISSING_SESSION_MESSAGE)]
    MissingSession,

    #[error("{}", server_message(.details))]
    Server { status: u16, details: Option<String> },

    /// Transport failure. The underlying error stays reachable via `source()`.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Http(#[from] reqwest::Error),

    /// Response body did not decode.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Parse(#[from] serde_json::Error),
}

fn server_message(details: &Option<String>) -> &str {
    details.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE)
}
