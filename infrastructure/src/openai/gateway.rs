//! OpenAI chat-completions gateway

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::FileOpenAiConfig;
use crate::http::{build_client, send_json};
use async_trait::async_trait;
use curator_application::{ChatCompletionGateway, GatewayError};
use curator_domain::Message;
use tracing::{debug, info};

/// [`ChatCompletionGateway`] backed by the OpenAI HTTP API
pub struct OpenAiChatGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiChatGateway {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Build from the `[openai]` config section; fails when no API key is set
    pub fn from_config(config: &FileOpenAiConfig) -> Result<Self, GatewayError> {
        let api_key = config.api_key().ok_or_else(|| {
            GatewayError::Unauthorized("OPENAI_API_KEY is not set".to_string())
        })?;
        Self::new(
            api_key,
            &config.base_url,
            &config.model,
            config.timeout_seconds,
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletionGateway for OpenAiChatGateway {
    async fn create_chat_completion(&self, messages: &[Message]) -> Result<String, GatewayError> {
        info!(
            "Requesting chat completion from {} ({} messages)",
            self.model,
            messages.len()
        );
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        let response: ChatCompletionResponse = send_json(
            self.client
                .post(self.completions_url())
                .bearer_auth(&self.api_key)
                .json(&request),
        )
        .await?;

        let content = response.first_content().ok_or_else(|| {
            GatewayError::InvalidResponse("completion has no message content".to_string())
        })?;
        debug!("Completion: {} chars", content.len());
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_api_key() {
        let config = FileOpenAiConfig::default();
        assert!(matches!(
            OpenAiChatGateway::from_config(&config),
            Err(GatewayError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let gateway =
            OpenAiChatGateway::new("sk-test", "http://localhost:8080/v1/", "gpt-4", 5).unwrap();
        assert_eq!(
            gateway.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(gateway.model_name(), "gpt-4");
    }
}
