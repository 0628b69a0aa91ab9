//! Chat-completion conversation primitives.

pub mod message;
