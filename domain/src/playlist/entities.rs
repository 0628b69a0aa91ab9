//! Playlist entities

use crate::song::entities::Song;
use serde::{Deserialize, Serialize};

/// The language model's answer to a curation prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlaylist {
    /// Suggested playlist title, if the model supplied one
    pub title: Option<String>,
    /// Songs in the order the model proposed them
    pub songs: Vec<Song>,
}

impl GeneratedPlaylist {
    pub fn new(title: Option<String>, songs: Vec<Song>) -> Self {
        Self { title, songs }
    }

    /// The model's title, or `fallback` when it gave none
    pub fn title_or(&self, fallback: &str) -> String {
        self.title.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Summary of a curated playlist, kept for display after a run
///
/// Only written once the playlist exists on the streaming service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub playlist_name: String,
    pub playlist_description: String,
    pub songs: Vec<Song>,
    pub resolved_track_count: usize,
    pub playlist_id: String,
}
