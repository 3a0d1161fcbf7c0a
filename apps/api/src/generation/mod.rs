// Interview question generation: prompt construction, the model call, and the HTTP handler.
// All model calls go through llm_client; no direct gateway requests here.

pub mod generator;
pub mod handlers;
pub mod prompts;
