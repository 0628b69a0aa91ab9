//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod add_tracks;
pub mod authenticate;
pub mod curate_playlist;
pub mod resolve_track;
pub(crate) mod shared;
