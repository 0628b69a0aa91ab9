//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished run is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Playlist summary, song list and the errors/warnings section (default)
    #[default]
    Full,
    /// Playlist summary only, errors condensed to a count
    Summary,
    /// The whole run state as JSON
    Json,
}
