//! Authentication session value object

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Tokens are treated as expired this long before their real expiry
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Access/refresh token pair for the streaming service
///
/// Owned by the shell and passed by reference into every remote call.
/// Never written to disk.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    access_token: String,
    refresh_token: Option<String>,
    expires_at: DateTime<Utc>,
    scope: Option<String>,
}

impl AuthSession {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            expires_at,
            scope: None,
        }
    }

    /// Build from an `expires_in` (seconds) relative to `now`
    pub fn issued_at(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_in_secs: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(
            access_token,
            refresh_token,
            now + Duration::seconds(expires_in_secs),
        )
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// True once `now` is within [`EXPIRY_MARGIN_SECS`] of expiry
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECS) >= self.expires_at
    }

    /// Replace tokens after a refresh.
    ///
    /// The service may omit the refresh token in a refresh response; the
    /// previous one stays valid in that case.
    pub fn refreshed(self, next: AuthSession) -> AuthSession {
        AuthSession {
            refresh_token: next.refresh_token.or(self.refresh_token),
            scope: next.scope.or(self.scope),
            ..next
        }
    }
}

// Keep tokens out of logs
impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &"<redacted>")
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish()
    }
}
