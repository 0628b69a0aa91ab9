//! Spotify authorization-code flow

use super::protocol::TokenResponse;
use crate::config::FileSpotifyConfig;
use crate::http::{build_client, send_json};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curator_application::{AuthError, AuthProvider};
use curator_domain::AuthSession;
use reqwest::Url;
use tracing::{debug, info};

/// [`AuthProvider`] for the Spotify accounts service
pub struct SpotifyOAuth {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scope: String,
    authorize_endpoint: Url,
    token_endpoint: Url,
}

impl SpotifyOAuth {
    /// Build from the `[spotify]` config section; fails when a client credential is missing
    pub fn from_config(config: &FileSpotifyConfig) -> Result<Self, AuthError> {
        let client_id = config
            .client_id()
            .ok_or_else(|| AuthError::MissingCredential("SPOTIPY_CLIENT_ID".to_string()))?;
        let client_secret = config
            .client_secret()
            .ok_or_else(|| AuthError::MissingCredential("SPOTIPY_CLIENT_SECRET".to_string()))?;

        let base = config.accounts_base_url.trim_end_matches('/');
        let parse = |path: &str| {
            Url::parse(&format!("{}/{}", base, path))
                .map_err(|e| AuthError::TokenRequest(format!("Invalid accounts URL: {}", e)))
        };

        Ok(Self {
            client: build_client(config.timeout_seconds)
                .map_err(|e| AuthError::TokenRequest(e.to_string()))?,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope.clone(),
            authorize_endpoint: parse("authorize")?,
            token_endpoint: parse("api/token")?,
        })
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, AuthError> {
        debug!("POST {}", self.token_endpoint);
        send_json(
            self.client
                .post(self.token_endpoint.clone())
                .basic_auth(&self.client_id, Some(&self.client_secret))
                .form(form),
        )
        .await
        .map_err(|e| AuthError::TokenRequest(e.to_string()))
    }
}

#[async_trait]
impl AuthProvider for SpotifyOAuth {
    fn authorize_url(&self, state: &str) -> String {
        let mut url = self.authorize_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &self.scope)
            .append_pair("state", state)
            .append_pair("show_dialog", "false");
        url.into()
    }

    async fn exchange_code(&self, code: &str, now: DateTime<Utc>) -> Result<AuthSession, AuthError> {
        let token = self
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .await?;
        info!("Exchanged authorization code for access token");
        Ok(token.into_session(now))
    }

    async fn refresh(&self, session: &AuthSession, now: DateTime<Utc>) -> Result<AuthSession, AuthError> {
        let refresh_token = session.refresh_token().ok_or(AuthError::NoRefreshToken)?;
        let token = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .await?;
        Ok(token.into_session(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FileSpotifyConfig {
        FileSpotifyConfig {
            client_id: Some("cid".to_string()),
            client_secret: Some("secret".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_requires_credentials() {
        let mut missing = config();
        missing.client_secret = None;
        assert_eq!(
            SpotifyOAuth::from_config(&missing).err(),
            Some(AuthError::MissingCredential(
                "SPOTIPY_CLIENT_SECRET".to_string()
            ))
        );
    }

    #[test]
    fn test_authorize_url() {
        let oauth = SpotifyOAuth::from_config(&config()).unwrap();
        let url = Url::parse(&oauth.authorize_url("xyz")).unwrap();

        assert_eq!(url.host_str(), Some("accounts.spotify.com"));
        assert_eq!(url.path(), "/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |k: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("client_id"), Some("cid"));
        assert_eq!(get("response_type"), Some("code"));
        assert_eq!(get("redirect_uri"), Some("http://127.0.0.1:8888/callback"));
        assert_eq!(
            get("scope"),
            Some("playlist-modify-private playlist-modify-public user-read-private")
        );
        assert_eq!(get("state"), Some("xyz"));
    }

    #[test]
    fn test_token_endpoint() {
        let oauth = SpotifyOAuth::from_config(&config()).unwrap();
        assert_eq!(
            oauth.token_endpoint.as_str(),
            "https://accounts.spotify.com/api/token"
        );
    }
}
