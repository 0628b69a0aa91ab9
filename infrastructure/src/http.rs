//! Shared HTTP plumbing for the remote-service adapters

use curator_application::GatewayError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("playlist-curator/", env!("CARGO_PKG_VERSION"));

/// Longest response body kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Build a client with a whole-request timeout
pub fn build_client(timeout_seconds: u64) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))
}

/// Map a transport-level failure
pub fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

/// Map a non-success HTTP status and its body
pub fn status_error(status: u16, body: &str) -> GatewayError {
    let message = curator_domain::core::string::truncate(body.trim(), MAX_ERROR_BODY_CHARS);
    match status {
        401 => GatewayError::Unauthorized(message),
        _ => GatewayError::RequestFailed { status, message },
    }
}

/// Send a request and decode a JSON body, mapping every failure to [`GatewayError`]
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, GatewayError> {
    let response = request.send().await.map_err(map_send_error)?;
    let status = response.status();
    let body = response.text().await.map_err(map_send_error)?;

    if !status.is_success() {
        debug!("HTTP {} response body: {}", status, body);
        return Err(status_error(status.as_u16(), &body));
    }

    decode_body(&body)
}

/// Decode a successful response body
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| {
        GatewayError::InvalidResponse(format!("Failed to parse response body: {}", e))
    })
}
