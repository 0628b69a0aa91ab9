//! Curation parameters — use case behavior control.
//!
//! [`CurationParams`] groups the static parameters that control how
//! [`CuratePlaylistUseCase`](crate::use_cases::curate_playlist::CuratePlaylistUseCase)
//! names playlists and batches track additions.

use crate::ports::music_catalog::TRACK_ITEM_TYPE;
use curator_domain::PlaylistNaming;
use serde::{Deserialize, Serialize};

/// Maximum number of URIs the streaming service accepts per add request
pub const MAX_ADD_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationParams {
    /// URIs submitted per add-items call
    pub batch_size: usize,
    /// Playlist name prefix and title truncation
    pub naming: PlaylistNaming,
    /// Catalog item type used for song searches
    pub search_item_type: String,
}

impl Default for CurationParams {
    fn default() -> Self {
        Self {
            batch_size: MAX_ADD_BATCH_SIZE,
            naming: PlaylistNaming::default(),
            search_item_type: TRACK_ITEM_TYPE.to_string(),
        }
    }
}

impl CurationParams {
    // ==================== Builder Methods ====================

    /// Batch size, clamped to 1..=100
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.clamp(1, MAX_ADD_BATCH_SIZE);
        self
    }

    pub fn with_naming(mut self, naming: PlaylistNaming) -> Self {
        self.naming = naming;
        self
    }
}
