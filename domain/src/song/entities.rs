//! Song entity

use serde::{Deserialize, Serialize};

/// A song proposed by the language model (Value Object)
///
/// Immutable once parsed: both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    /// Create a song, trimming both fields.
    ///
    /// Returns `None` when either field is blank after trimming.
    pub fn new(title: impl AsRef<str>, artist: impl AsRef<str>) -> Option<Self> {
        let title = title.as_ref().trim();
        let artist = artist.as_ref().trim();
        if title.is_empty() || artist.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            artist: artist.to_string(),
        })
    }

    /// Free-text query: title followed by artist
    pub fn to_query(&self) -> String {
        format!("{} {}", self.title, self.artist).trim().to_string()
    }

    /// Field-scoped search query for the streaming service catalog
    pub fn search_query(&self) -> String {
        format!("track:{} artist:{}", self.title, self.artist)
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.title, self.artist)
    }
}
