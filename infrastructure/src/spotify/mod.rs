//! Spotify adapters
//!
//! - [`SpotifyClient`]: Web API calls behind [`MusicCatalog`](curator_application::MusicCatalog)
//! - [`SpotifyOAuth`]: authorization-code flow behind [`AuthProvider`](curator_application::AuthProvider)

mod client;
mod oauth;
mod protocol;

pub use client::SpotifyClient;
pub use oauth::SpotifyOAuth;
