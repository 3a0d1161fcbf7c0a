use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the gateway bindings were missing at startup; generation
    /// requests then fail fast without calling the model.
    pub generator: Option<Arc<dyn TextGenerator>>,
}
