//! Authentication provider port
//!
//! OAuth authorization-code flow against the streaming service. Owned by the
//! shell: the curation use case only ever sees the resulting [`AuthSession`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curator_domain::AuthSession;
use thiserror::Error;

/// Errors raised while obtaining or refreshing tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Authorization was denied: {0}")]
    Denied(String),

    #[error("No authorization code in redirect: {0}")]
    MissingCode(String),

    #[error("Malformed redirect: {0}")]
    MalformedRedirect(String),

    #[error("State mismatch in redirect")]
    StateMismatch,

    #[error("Could not read input: {0}")]
    Input(String),

    #[error("Token request failed: {0}")]
    TokenRequest(String),

    #[error("Session has no refresh token")]
    NoRefreshToken,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// URL the user opens to grant access
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange an authorization code for tokens
    async fn exchange_code(&self, code: &str, now: DateTime<Utc>) -> Result<AuthSession, AuthError>;

    /// Obtain a new access token from a session's refresh token
    async fn refresh(&self, session: &AuthSession, now: DateTime<Utc>) -> Result<AuthSession, AuthError>;
}
