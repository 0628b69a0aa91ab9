//! Presentation-level configuration
//!
//! Configuration for output formatting and shell behavior.

use curator_domain::{DEFAULT_SONGS, OutputFormat};
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

/// Shell configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Songs requested until changed with `/limit`
    pub default_limit: usize,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            default_limit: DEFAULT_SONGS,
            history_file: None,
        }
    }
}
