//! Application layer for playlist-curator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CurationParams, MAX_ADD_BATCH_SIZE};
pub use ports::{
    auth_provider::{AuthError, AuthProvider},
    llm_gateway::{ChatCompletionGateway, GatewayError},
    music_catalog::{MusicCatalog, NewPlaylist, TRACK_ITEM_TYPE},
    progress::{NoProgress, RunProgressNotifier},
};
pub use use_cases::add_tracks::{BatchAdder, BatchReport, ChunkOutcome, batch_count};
pub use use_cases::authenticate::{AuthenticateUseCase, AuthorizationRedirect, PastedAuthorization};
pub use use_cases::curate_playlist::CuratePlaylistUseCase;
pub use use_cases::resolve_track::{TrackResolution, TrackResolver};
