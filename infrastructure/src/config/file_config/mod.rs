//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod curation;
mod openai;
mod output;
mod spotify;

pub use curation::FileCurationConfig;
pub use openai::FileOpenAiConfig;
pub use output::FileOutputConfig;
pub use spotify::{DEFAULT_SCOPE, FileSpotifyConfig};

use curator_application::MAX_ADD_BATCH_SIZE;
use curator_domain::{MAX_SONGS, MIN_SONGS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{section}.timeout_seconds cannot be 0")]
    InvalidTimeout { section: &'static str },

    #[error("openai.model cannot be empty")]
    EmptyModelName,

    #[error("curation.default_limit must be between {min} and {max}, got {got}")]
    InvalidDefaultLimit { min: usize, max: usize, got: usize },

    #[error("curation.batch_size must be between 1 and {max}, got {got}")]
    InvalidBatchSize { max: usize, got: usize },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language model settings
    pub openai: FileOpenAiConfig,
    /// Streaming service settings
    pub spotify: FileSpotifyConfig,
    /// Playlist naming and batching
    pub curation: FileCurationConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.openai.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout { section: "openai" });
        }
        if self.spotify.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout { section: "spotify" });
        }
        if self.openai.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let limit = self.curation.default_limit;
        if !(MIN_SONGS..=MAX_SONGS).contains(&limit) {
            return Err(ConfigValidationError::InvalidDefaultLimit {
                min: MIN_SONGS,
                max: MAX_SONGS,
                got: limit,
            });
        }

        let batch = self.curation.batch_size;
        if batch == 0 || batch > MAX_ADD_BATCH_SIZE {
            return Err(ConfigValidationError::InvalidBatchSize {
                max: MAX_ADD_BATCH_SIZE,
                got: batch,
            });
        }

        Ok(())
    }
}
