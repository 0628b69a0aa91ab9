//! Application-level configuration.
//!
//! - [`CurationParams`] — batching, naming and search parameters for a run

pub mod curation_params;

pub use curation_params::{CurationParams, MAX_ADD_BATCH_SIZE};
