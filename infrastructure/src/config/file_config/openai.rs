//! Language model configuration from TOML (`[openai]` section)

use serde::{Deserialize, Serialize};

/// OpenAI chat-completions configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// API key. Usually supplied through `OPENAI_API_KEY` rather than the file.
    pub api_key: Option<String>,
    /// Chat model name.
    pub model: String,
    /// Base URL for the API (can be pointed at a compatible server).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileOpenAiConfig {
    /// API key if one is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
