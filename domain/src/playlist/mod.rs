//! Playlists: what was asked for, what the model proposed, how it is named,
//! and what was created.

pub mod entities;
pub mod naming;
pub mod request;
