use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: GeminiClient. Tests swap in a stub.
    pub llm: Arc<dyn LanguageModel>,
    pub config: Config,
}
