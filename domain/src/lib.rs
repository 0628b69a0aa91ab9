//! Domain layer for playlist-curator
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Curation run
//!
//! A run turns a free-text description into a playlist in six stages
//! ([`RunStage`]): generate songs, identify the user, create the playlist,
//! resolve tracks, add tracks, finalize. Every remote call is recorded as a
//! [`ToolResult`]; failures become [`ToolError`] entries on the [`RunState`].
//!
//! ## Song parsing
//!
//! The language model's answer is parsed leniently ([`parse_generated_playlist`]):
//! malformed items are skipped one by one, never the whole list.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod core;
pub mod playlist;
pub mod prompt;
pub mod run;
pub mod song;

// Re-export commonly used types
pub use auth::session::AuthSession;
pub use catalog::entities::{CreatedPlaylist, SnapshotAck, TrackItem, TrackSearchPage, UserProfile};
pub use chat::message::{Message, Role};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use playlist::{
    entities::{GeneratedPlaylist, PlaylistSummary},
    naming::PlaylistNaming,
    request::{CurationRequest, DEFAULT_SONGS, MAX_SONGS, MIN_SONGS},
};
pub use prompt::PromptTemplate;
pub use run::{
    result::{ErrorKind, Severity, ToolError, ToolResult},
    state::{RunStage, RunState},
};
pub use song::{
    entities::Song,
    parsing::{parse_generated_playlist, parse_song_list},
};
