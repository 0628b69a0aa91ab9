//! OpenAI adapter
//!
//! Implements [`ChatCompletionGateway`](curator_application::ChatCompletionGateway)
//! over the chat-completions endpoint.

mod gateway;
mod protocol;

pub use gateway::OpenAiChatGateway;
