//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for curation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Playlist, songs and every error or warning
    Full,
    /// Playlist name, track counts and an error count
    Summary,
    /// The whole run state as JSON
    Json,
}

impl From<OutputFormat> for curator_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => curator_domain::OutputFormat::Full,
            OutputFormat::Summary => curator_domain::OutputFormat::Summary,
            OutputFormat::Json => curator_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for playlist-curator
#[derive(Parser, Debug)]
#[command(name = "playlist-curator")]
#[command(author, version, about = "Turn a free-text mood into a Spotify playlist")]
#[command(long_about = r#"
Playlist Curator asks a language model for songs matching a description and
builds a private Spotify playlist from them.

A run has six stages:
1. Generate: the model proposes a title and up to N songs
2. Identify user: fetch your Spotify profile
3. Create playlist: a private playlist named "AI: <title>"
4. Resolve tracks: search Spotify for each song
5. Add tracks: add the found tracks in batches of 100
6. Finalize: print the summary and every error or warning

Credentials are read from the environment:
  OPENAI_API_KEY, SPOTIPY_CLIENT_ID, SPOTIPY_CLIENT_SECRET,
  SPOTIPY_REDIRECT_URI (optional), SCOPE (optional)

Configuration files are loaded from (in priority order):
1. --config <path>      Explicit config file
2. ./curator.toml       Project-level config
3. ~/.config/playlist-curator/config.toml   Global config

Example:
  playlist-curator "songs for a rainy sunday morning"
  playlist-curator -n 25 -o summary "90s road trip singalongs"
  playlist-curator --interactive
"#)]
pub struct Cli {
    /// Description of the playlist (not required in interactive mode)
    pub description: Option<String>,

    /// Number of songs to request (1-50)
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Start the interactive shell
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
