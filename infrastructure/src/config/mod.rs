//! Configuration file loading for playlist-curator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`OPENAI_API_KEY`, `SPOTIPY_*`, `SCOPE`, `CURATOR_*`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./curator.toml` or `./.curator.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/playlist-curator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_SCOPE, FileConfig, FileCurationConfig, FileOpenAiConfig,
    FileOutputConfig, FileSpotifyConfig,
};
pub use loader::ConfigLoader;
