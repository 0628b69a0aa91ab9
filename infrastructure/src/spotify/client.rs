//! Spotify Web API client

use crate::config::FileSpotifyConfig;
use crate::http::{build_client, send_json};
use async_trait::async_trait;
use curator_application::{GatewayError, MusicCatalog, NewPlaylist};
use curator_domain::{AuthSession, CreatedPlaylist, SnapshotAck, TrackSearchPage, UserProfile};
use reqwest::Url;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct CreatePlaylistBody<'a> {
    name: &'a str,
    description: &'a str,
    public: bool,
}

#[derive(Debug, Serialize)]
struct AddItemsBody<'a> {
    uris: &'a [String],
}

/// [`MusicCatalog`] backed by the Spotify Web API
pub struct SpotifyClient {
    client: reqwest::Client,
    api_base_url: Url,
}

impl SpotifyClient {
    pub fn new(api_base_url: &str, timeout_seconds: u64) -> Result<Self, GatewayError> {
        let api_base_url = Url::parse(api_base_url.trim_end_matches('/')).map_err(|e| {
            GatewayError::Other(format!("Invalid API base URL '{}': {}", api_base_url, e))
        })?;
        Ok(Self {
            client: build_client(timeout_seconds)?,
            api_base_url,
        })
    }

    pub fn from_config(config: &FileSpotifyConfig) -> Result<Self, GatewayError> {
        Self::new(&config.api_base_url, config.timeout_seconds)
    }

    /// API URL with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Other(format!("Cannot extend URL {}", self.api_base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl MusicCatalog for SpotifyClient {
    async fn current_user_profile(&self, auth: &AuthSession) -> Result<UserProfile, GatewayError> {
        let url = self.endpoint(&["me"])?;
        debug!("GET {}", url);
        send_json(self.client.get(url).bearer_auth(auth.access_token())).await
    }

    async fn create_playlist(
        &self,
        auth: &AuthSession,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist, GatewayError> {
        let url = self.endpoint(&["users", user_id, "playlists"])?;
        debug!("POST {} ({})", url, playlist.name);
        let body = CreatePlaylistBody {
            name: &playlist.name,
            description: &playlist.description,
            public: playlist.public,
        };
        send_json(
            self.client
                .post(url)
                .bearer_auth(auth.access_token())
                .json(&body),
        )
        .await
    }

    async fn search(
        &self,
        auth: &AuthSession,
        query: &str,
        item_type: &str,
    ) -> Result<TrackSearchPage, GatewayError> {
        let url = self.endpoint(&["search"])?;
        debug!("GET {} q={:?} type={}", url, query, item_type);
        send_json(
            self.client
                .get(url)
                .bearer_auth(auth.access_token())
                .query(&[("q", query), ("type", item_type)]),
        )
        .await
    }

    async fn add_items_to_playlist(
        &self,
        auth: &AuthSession,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<SnapshotAck, GatewayError> {
        let url = self.endpoint(&["playlists", playlist_id, "tracks"])?;
        debug!("POST {} ({} uris)", url, uris.len());
        send_json(
            self.client
                .post(url)
                .bearer_auth(auth.access_token())
                .json(&AddItemsBody { uris }),
        )
        .await
    }
}
