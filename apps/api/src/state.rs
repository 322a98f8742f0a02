use std::sync::Arc;

use crate::config::Config;
use crate::ideas::IdeaGenerator;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
    /// Pluggable idea generator. Default: LlmIdeaGenerator. Swap via IDEA_SOURCE.
    pub idea_generator: Arc<dyn IdeaGenerator>,
}
