//! Music catalog port
//!
//! The streaming-service operations a curation run needs. Every call takes
//! the caller's [`AuthSession`]; adapters must not cache or refresh it.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use curator_domain::{AuthSession, CreatedPlaylist, SnapshotAck, TrackSearchPage, UserProfile};

/// Item type searched for when resolving songs
pub const TRACK_ITEM_TYPE: &str = "track";

/// Parameters for creating a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub public: bool,
}

impl NewPlaylist {
    /// Private playlist, the only kind the curator creates
    pub fn private(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            public: false,
        }
    }
}

#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Profile of the user the token belongs to
    async fn current_user_profile(&self, auth: &AuthSession) -> Result<UserProfile, GatewayError>;

    /// Create a playlist owned by `user_id`
    async fn create_playlist(
        &self,
        auth: &AuthSession,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist, GatewayError>;

    /// Search the catalog
    async fn search(
        &self,
        auth: &AuthSession,
        query: &str,
        item_type: &str,
    ) -> Result<TrackSearchPage, GatewayError>;

    /// Append items to a playlist (at most 100 URIs per call)
    async fn add_items_to_playlist(
        &self,
        auth: &AuthSession,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<SnapshotAck, GatewayError>;
}
