//! Completion backend configuration.

use serde::{Deserialize, Serialize};

/// Default endpoint: a local Ollama with the OpenAI-compatible API prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Settings for the chat-completion backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base endpoint including the API prefix (e.g. "http://localhost:11434/v1").
    pub base_url: String,
    /// Model identifier passed through to the backend.
    pub model: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}
