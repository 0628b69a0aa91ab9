//! Curation configuration from TOML (`[curation]` section)

use curator_application::{CurationParams, MAX_ADD_BATCH_SIZE};
use curator_domain::playlist::naming::{DEFAULT_NAME_MAX_CHARS, DEFAULT_NAME_PREFIX};
use curator_domain::{DEFAULT_SONGS, PlaylistNaming};
use serde::{Deserialize, Serialize};

/// Raw curation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCurationConfig {
    /// Songs requested when no limit is given on the command line
    pub default_limit: usize,
    /// URIs per add-items call (1..=100)
    pub batch_size: usize,
    /// Prefix of created playlist names
    pub name_prefix: String,
    /// Characters of the generated title kept in the playlist name
    pub name_max_chars: usize,
}

impl Default for FileCurationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SONGS,
            batch_size: MAX_ADD_BATCH_SIZE,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            name_max_chars: DEFAULT_NAME_MAX_CHARS,
        }
    }
}

impl FileCurationConfig {
    /// Convert to application-layer parameters
    pub fn to_curation_params(&self) -> CurationParams {
        CurationParams::default()
            .with_batch_size(self.batch_size)
            .with_naming(PlaylistNaming::new(
                self.name_prefix.clone(),
                self.name_max_chars,
            ))
    }
}
