//! Streaming-service authentication state.

pub mod session;
