//! Naming rules for playlists created on the streaming service.

use crate::core::string::take_chars;
use serde::{Deserialize, Serialize};

/// Prefix marking playlists created by the curator
pub const DEFAULT_NAME_PREFIX: &str = "AI: ";

/// Characters of the generated title kept in the playlist name
pub const DEFAULT_NAME_MAX_CHARS: usize = 40;

/// Maximum playlist description length accepted by the streaming service
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// How playlist names and descriptions are built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistNaming {
    pub prefix: String,
    pub max_title_chars: usize,
}

impl Default for PlaylistNaming {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_NAME_PREFIX.to_string(),
            max_title_chars: DEFAULT_NAME_MAX_CHARS,
        }
    }
}

impl PlaylistNaming {
    pub fn new(prefix: impl Into<String>, max_title_chars: usize) -> Self {
        Self {
            prefix: prefix.into(),
            max_title_chars,
        }
    }

    /// Display name: prefix followed by the title cut to `max_title_chars`
    pub fn name_for(&self, title: &str) -> String {
        format!("{}{}", self.prefix, take_chars(title.trim(), self.max_title_chars))
    }

    /// Description sent with the create call
    pub fn description_for(&self, description: &str) -> String {
        take_chars(description.trim(), MAX_DESCRIPTION_CHARS).to_string()
    }
}
