//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — truncation and fence stripping helpers

pub mod error;
pub mod string;
