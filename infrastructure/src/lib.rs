//! Infrastructure layer for playlist-curator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod openai;
pub mod spotify;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileCurationConfig, FileOpenAiConfig,
    FileOutputConfig, FileSpotifyConfig,
};
pub use openai::OpenAiChatGateway;
pub use spotify::{SpotifyClient, SpotifyOAuth};
