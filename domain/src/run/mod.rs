//! Curation runs: stages, per-call results, and the state a run leaves behind.

pub mod result;
pub mod state;
pub mod tool_names;
