//! Streaming-service catalog data as seen by the curator.

pub mod entities;
