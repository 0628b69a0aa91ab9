//! Streaming service configuration from TOML (`[spotify]` section)

use serde::{Deserialize, Serialize};

/// Scopes needed to read the profile and write private or public playlists
pub const DEFAULT_SCOPE: &str = "playlist-modify-private playlist-modify-public user-read-private";

/// Spotify Web API and accounts configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpotifyConfig {
    /// OAuth client id (`SPOTIPY_CLIENT_ID`).
    pub client_id: Option<String>,
    /// OAuth client secret (`SPOTIPY_CLIENT_SECRET`).
    pub client_secret: Option<String>,
    /// Redirect URI registered for the client (`SPOTIPY_REDIRECT_URI`).
    pub redirect_uri: String,
    /// Space-separated OAuth scopes (`SCOPE`).
    pub scope: String,
    /// Web API base URL.
    pub api_base_url: String,
    /// Accounts service base URL (authorize and token endpoints).
    pub accounts_base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileSpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            api_base_url: "https://api.spotify.com/v1".to_string(),
            accounts_base_url: "https://accounts.spotify.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileSpotifyConfig {
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spotify_section_overrides() {
        let toml_str = r#"
[spotify]
client_id = "abc"
redirect_uri = "http://localhost:9090/cb"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.spotify.client_id(), Some("abc"));
        assert!(config.spotify.client_secret().is_none());
        assert_eq!(config.spotify.redirect_uri, "http://localhost:9090/cb");
        assert_eq!(config.spotify.scope, DEFAULT_SCOPE);
    }
}
