//! Track resolution
//!
//! Maps a [`Song`] to a catalog track URI with a field-scoped search
//! (`track:<title> artist:<artist>`), taking the first hit.

use crate::ports::llm_gateway::GatewayError;
use crate::ports::music_catalog::{MusicCatalog, TRACK_ITEM_TYPE};
use curator_domain::{AuthSession, Song};
use std::sync::Arc;
use tracing::debug;

/// Outcome of resolving one song
///
/// `NotFound` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackResolution {
    Found(String),
    NotFound,
}

/// Resolves songs against the streaming-service catalog
pub struct TrackResolver<C: MusicCatalog + 'static> {
    catalog: Arc<C>,
    item_type: String,
}

impl<C: MusicCatalog + 'static> TrackResolver<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            item_type: TRACK_ITEM_TYPE.to_string(),
        }
    }

    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    /// Search for `song` and return the first track URI.
    ///
    /// Transport and HTTP failures are returned as errors; the caller decides
    /// whether to continue.
    pub async fn resolve(
        &self,
        song: &Song,
        auth: &AuthSession,
    ) -> Result<TrackResolution, GatewayError> {
        let query = song.search_query();
        let page = self.catalog.search(auth, &query, &self.item_type).await?;

        let resolution = match page.first_track_uri() {
            Some(uri) => TrackResolution::Found(uri.to_string()),
            None => TrackResolution::NotFound,
        };
        debug!("Resolved {:?} -> {:?}", query, resolution);
        Ok(resolution)
    }
}
