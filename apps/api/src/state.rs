use std::sync::Arc;

use crate::chat::history::MessageStore;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Conversation log. Postgres in production, in-memory in handler tests.
    pub store: Arc<dyn MessageStore>,
    pub llm: LlmClient,
    /// Loaded once at startup; handlers read provider settings from here.
    pub config: Config,
}
