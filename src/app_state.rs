use crate::{config::Config, ollama::OllamaClient};

/// Shared application state injected into every request handler via Axum's
/// `State` extractor. Built once at startup and never mutated.
pub struct AppState {
    pub config: Config,
    /// Assembled once from the topic name and notes; sent first on every chat.
    pub system_prompt: String,
    /// `None` until the backend client has been built. Handlers that need
    /// Ollama answer 500 in that window.
    pub ollama: Option<OllamaClient>,
}

impl AppState {
    pub fn new(config: Config, system_prompt: String, ollama: Option<OllamaClient>) -> Self {
        Self { config, system_prompt, ollama }
    }
}
