//! LLM Gateway port
//!
//! Defines the interface for asking a language model for a chat completion,
//! and the error type shared by every remote-service port.

use async_trait::async_trait;
use curator_domain::{ErrorKind, Message, ToolError};
use thiserror::Error;

/// Errors that can occur when talking to a remote service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with HTTP {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Category used when the error is recorded on a run
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::InvalidResponse(_) => ErrorKind::MalformedResponse,
            _ => ErrorKind::RemoteCallFailed,
        }
    }

    /// Convert into a run error attributed to `tool`
    pub fn to_tool_error(&self, tool: &str) -> ToolError {
        ToolError::new(tool, self.kind(), self.to_string()).with_trace(format!("{:?}", self))
    }
}

/// Gateway for chat completions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatCompletionGateway: Send + Sync {
    /// Send the conversation and return the completion text of the first choice
    async fn create_chat_completion(&self, messages: &[Message]) -> Result<String, GatewayError>;

    /// Model identifier, for logs and display
    fn model_name(&self) -> &str;
}
