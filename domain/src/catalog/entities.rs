//! Streaming-service catalog views
//!
//! Only the fields the curator reads are modelled, and every one is optional:
//! presence is checked by the use case, not by deserialization, so a profile
//! without an `id` is a recorded error rather than a decode failure.

use serde::{Deserialize, Serialize};

/// The signed-in user's profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserProfile {
    /// Name to greet the user with
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("unknown user")
    }
}

/// Playlist returned by the create call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

impl CreatedPlaylist {
    pub fn web_url(&self) -> Option<&str> {
        self.external_urls.as_ref()?.spotify.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

/// Response of a catalog search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSearchPage {
    #[serde(default)]
    pub tracks: Option<TrackItems>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackItems {
    #[serde(default)]
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackItem {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl TrackSearchPage {
    /// URI of the first track hit, if any
    pub fn first_track_uri(&self) -> Option<&str> {
        self.tracks
            .as_ref()?
            .items
            .first()?
            .uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
    }
}

/// Acknowledgement of an add-items call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotAck {
    #[serde(default)]
    pub snapshot_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_track_uri() {
        let page: TrackSearchPage = serde_json::from_str(
            r#"{"tracks": {"items": [{"uri": "spotify:track:1", "name": "A"}, {"uri": "spotify:track:2"}]}}"#,
        )
        .unwrap();
        assert_eq!(page.first_track_uri(), Some("spotify:track:1"));
    }

    #[test]
    fn test_first_track_uri_absent() {
        for raw in [
            r#"{}"#,
            r#"{"tracks": null}"#,
            r#"{"tracks": {}}"#,
            r#"{"tracks": {"items": []}}"#,
            r#"{"tracks": {"items": [{"name": "no uri"}]}}"#,
        ] {
            let page: TrackSearchPage = serde_json::from_str(raw).unwrap();
            assert_eq!(page.first_track_uri(), None, "input: {}", raw);
        }
    }

    #[test]
    fn test_profile_without_id_decodes() {
        let profile: UserProfile = serde_json::from_str(r#"{"display_name": "Ana"}"#).unwrap();
        assert!(profile.id.is_none());
        assert_eq!(profile.label(), "Ana");
    }

    #[test]
    fn test_created_playlist_web_url() {
        let playlist: CreatedPlaylist = serde_json::from_str(
            r#"{"id": "pl1", "external_urls": {"spotify": "https://open.spotify.com/playlist/pl1"}}"#,
        )
        .unwrap();
        assert_eq!(playlist.web_url(), Some("https://open.spotify.com/playlist/pl1"));
    }
}
