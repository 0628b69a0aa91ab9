//! Terminal login for the authorization-code flow

use chrono::Utc;
use colored::Colorize;
use curator_application::{AuthError, AuthProvider, AuthenticateUseCase};
use curator_domain::AuthSession;
use std::io::{self, BufRead, Write};
use uuid::Uuid;

/// Random `state` value echoed back by the authorization page
fn login_state() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Print the authorization URL and complete the login from the pasted redirect
pub async fn interactive_login<A: AuthProvider + 'static>(
    auth: &AuthenticateUseCase<A>,
) -> Result<AuthSession, AuthError> {
    login_from(auth, &login_state(), io::stdin().lock()).await
}

async fn login_from<A: AuthProvider + 'static>(
    auth: &AuthenticateUseCase<A>,
    state: &str,
    input: impl BufRead,
) -> Result<AuthSession, AuthError> {
    println!();
    println!("{}", "Spotify login".cyan().bold());
    println!("Open this URL in your browser and allow access:");
    println!();
    println!("  {}", auth.authorize_url(state));
    println!();
    print!("Paste the URL you were redirected to: ");
    let _ = io::stdout().flush();

    let pasted = read_line(input)?;
    auth.complete_login(&pasted, state, Utc::now()).await
}

fn read_line(mut input: impl BufRead) -> Result<String, AuthError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| AuthError::Input(e.to_string()))?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::sync::{Arc, Mutex};

    struct RecordingProvider {
        exchanged: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AuthProvider for RecordingProvider {
        fn authorize_url(&self, state: &str) -> String {
            format!("https://accounts.example/authorize?state={}", state)
        }

        async fn exchange_code(&self, code: &str, now: DateTime<Utc>) -> Result<AuthSession, AuthError> {
            self.exchanged.lock().unwrap().push(code.to_string());
            Ok(AuthSession::issued_at("tok", None, 3600, now))
        }

        async fn refresh(&self, _session: &AuthSession, now: DateTime<Utc>) -> Result<AuthSession, AuthError> {
            Ok(AuthSession::issued_at("tok", None, 3600, now))
        }
    }

    fn auth() -> (Arc<RecordingProvider>, AuthenticateUseCase<RecordingProvider>) {
        let provider = Arc::new(RecordingProvider {
            exchanged: Mutex::new(Vec::new()),
        });
        (Arc::clone(&provider), AuthenticateUseCase::new(provider))
    }

    struct BrokenInput;

    impl io::Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    impl BufRead for BrokenInput {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_login_state_is_random_hex() {
        let a = login_state();
        let b = login_state();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_read_line_trims() {
        let input = io::Cursor::new("  http://127.0.0.1:8888/callback?code=abc \n");
        assert_eq!(
            read_line(input).unwrap(),
            "http://127.0.0.1:8888/callback?code=abc"
        );
    }

    #[test]
    fn test_read_line_failure_is_input_error() {
        assert!(matches!(read_line(BrokenInput), Err(AuthError::Input(_))));
    }

    #[tokio::test]
    async fn test_login_exchanges_code_from_matching_redirect() {
        let (provider, auth) = auth();
        let input = io::Cursor::new("http://127.0.0.1:8888/callback?code=c1&state=s1\n");

        let session = login_from(&auth, "s1", input).await.unwrap();

        assert_eq!(session.access_token(), "tok");
        assert_eq!(*provider.exchanged.lock().unwrap(), vec!["c1".to_string()]);
    }

    #[tokio::test]
    async fn test_login_rejects_unparseable_paste() {
        let (provider, auth) = auth();

        let garbage = io::Cursor::new("http://127.0.0.1:8888/callback?code=%C3&state=s1\n");
        assert!(matches!(
            login_from(&auth, "s1", garbage).await,
            Err(AuthError::MalformedRedirect(_))
        ));

        let no_state = io::Cursor::new("http://127.0.0.1:8888/callback?code=c1\n");
        assert_eq!(
            login_from(&auth, "s1", no_state).await.unwrap_err(),
            AuthError::StateMismatch
        );

        assert!(provider.exchanged.lock().unwrap().is_empty());
    }
}
