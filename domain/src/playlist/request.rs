//! Curation request value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

pub const MIN_SONGS: usize = 1;
pub const MAX_SONGS: usize = 50;
pub const DEFAULT_SONGS: usize = 10;

/// A validated request to curate a playlist (Value Object)
///
/// The description is non-blank and the song limit lies in
/// [`MIN_SONGS`]..=[`MAX_SONGS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationRequest {
    description: String,
    limit: usize,
}

impl CurationRequest {
    pub fn new(description: impl Into<String>, limit: usize) -> Result<Self, DomainError> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDescription(
                "description cannot be empty".to_string(),
            ));
        }
        if !(MIN_SONGS..=MAX_SONGS).contains(&limit) {
            return Err(DomainError::InvalidLimit {
                min: MIN_SONGS,
                max: MAX_SONGS,
                got: limit,
            });
        }
        Ok(Self {
            description: trimmed.to_string(),
            limit,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl std::fmt::Display for CurationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} songs)", self.description, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req = CurationRequest::new("  songs about rain ", 3).unwrap();
        assert_eq!(req.description(), "songs about rain");
        assert_eq!(req.limit(), 3);
    }

    #[test]
    fn test_blank_description_rejected() {
        assert!(matches!(
            CurationRequest::new("   ", 3),
            Err(DomainError::InvalidDescription(_))
        ));
    }

    #[test]
    fn test_limit_bounds() {
        assert!(CurationRequest::new("x", 1).is_ok());
        assert!(CurationRequest::new("x", 50).is_ok());
        assert!(matches!(
            CurationRequest::new("x", 0),
            Err(DomainError::InvalidLimit { got: 0, .. })
        ));
        assert!(CurationRequest::new("x", 51).is_err());
    }
}
