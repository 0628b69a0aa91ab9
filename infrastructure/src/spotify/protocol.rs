//! Accounts-service wire types

use chrono::{DateTime, Utc};
use curator_domain::AuthSession;
use serde::Deserialize;

/// Body of a successful token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> AuthSession {
        let session =
            AuthSession::issued_at(self.access_token, self.refresh_token, self.expires_in, now);
        match self.scope {
            Some(scope) => session.with_scope(scope),
            None => session,
        }
    }
}
