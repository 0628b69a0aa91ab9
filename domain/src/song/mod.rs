//! Songs proposed by the language model and the rules for parsing them.

pub mod entities;
pub mod parsing;
