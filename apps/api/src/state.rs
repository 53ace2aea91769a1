use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; the panels share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `LlmClient` against Groq.
    pub llm: Arc<dyn CompletionClient>,
}
