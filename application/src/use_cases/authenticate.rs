//! Authenticate use case
//!
//! Drives the authorization-code flow and keeps an [`AuthSession`] fresh.
//! The shell calls [`AuthenticateUseCase::ensure_fresh`] before every run so
//! the curation use case never sees an expired token.

use crate::ports::auth_provider::{AuthError, AuthProvider};
use chrono::{DateTime, Utc};
use curator_domain::AuthSession;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::{ParseError, Url, form_urlencoded};

/// Query parameters of the redirect from the authorization page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorizationRedirect {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

impl AuthorizationRedirect {
    fn from_pairs<'a>(
        pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    ) -> Result<Self, AuthError> {
        let mut redirect = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "code" => &mut redirect.code,
                "state" => &mut redirect.state,
                "error" => &mut redirect.error,
                _ => continue,
            };
            // Invalid UTF-8 escapes decode to U+FFFD
            if value.contains(char::REPLACEMENT_CHARACTER) {
                return Err(AuthError::MalformedRedirect(format!(
                    "invalid escape in `{}`",
                    key
                )));
            }
            *slot = Some(value.into_owned());
        }
        Ok(redirect)
    }

    /// The authorization code, once the redirect proves it answers our request.
    ///
    /// A denial wins over everything else; otherwise `state` must be present
    /// and equal to `expected_state`.
    pub fn verified_code(self, expected_state: &str) -> Result<String, AuthError> {
        if let Some(error) = self.error {
            return Err(AuthError::Denied(error));
        }
        if self.state.as_deref() != Some(expected_state) {
            return Err(AuthError::StateMismatch);
        }
        self.code
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AuthError::MissingCode("redirect has no code".to_string()))
    }
}

/// What the user pasted after authorizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PastedAuthorization {
    /// A redirect URL or its bare query string
    Redirect(AuthorizationRedirect),
    /// A raw authorization code
    BareCode(String),
}

impl PastedAuthorization {
    pub fn parse(input: &str) -> Result<Self, AuthError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AuthError::MissingCode("nothing was pasted".to_string()));
        }

        match Url::parse(input) {
            Ok(url) => AuthorizationRedirect::from_pairs(url.query_pairs()).map(Self::Redirect),
            Err(ParseError::RelativeUrlWithoutBase) if input.contains('=') => {
                let query = input.trim_start_matches('?');
                let query = query.split('#').next().unwrap_or(query);
                AuthorizationRedirect::from_pairs(form_urlencoded::parse(query.as_bytes()))
                    .map(Self::Redirect)
            }
            Err(ParseError::RelativeUrlWithoutBase) if input.contains(char::is_whitespace) => Err(
                AuthError::MalformedRedirect(format!("not a URL or code: {}", input)),
            ),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(Self::BareCode(input.to_string())),
            Err(e) => Err(AuthError::MalformedRedirect(e.to_string())),
        }
    }
}

/// Use case for logging in and refreshing tokens
pub struct AuthenticateUseCase<A: AuthProvider + 'static> {
    provider: Arc<A>,
}

impl<A: AuthProvider + 'static> AuthenticateUseCase<A> {
    pub fn new(provider: Arc<A>) -> Self {
        Self { provider }
    }

    /// URL the user must open to grant access
    pub fn authorize_url(&self, state: &str) -> String {
        self.provider.authorize_url(state)
    }

    /// Complete the login from what the user pasted after authorizing.
    ///
    /// A pasted redirect must echo `expected_state`. A bare code carries no
    /// state and is accepted with a warning.
    pub async fn complete_login(
        &self,
        pasted: &str,
        expected_state: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthSession, AuthError> {
        let code = match PastedAuthorization::parse(pasted)? {
            PastedAuthorization::Redirect(redirect) => redirect.verified_code(expected_state)?,
            PastedAuthorization::BareCode(code) => {
                warn!("Bare authorization code pasted; state cannot be checked");
                code
            }
        };

        let session = self.provider.exchange_code(&code, now).await?;
        info!("Logged in; token valid until {}", session.expires_at());
        Ok(session)
    }

    /// Return a session that is valid at `now`, refreshing if needed.
    pub async fn ensure_fresh(
        &self,
        session: AuthSession,
        now: DateTime<Utc>,
    ) -> Result<AuthSession, AuthError> {
        if !session.is_expired(now) {
            debug!("Token still valid until {}", session.expires_at());
            return Ok(session);
        }
        if session.refresh_token().is_none() {
            return Err(AuthError::NoRefreshToken);
        }
        info!("Access token expired; refreshing");
        let next = self.provider.refresh(&session, now).await?;
        Ok(session.refreshed(next))
    }
}
