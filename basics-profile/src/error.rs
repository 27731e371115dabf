//! Error types for profile parsing.

use thiserror::Error;

/// Profile-specific errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Patch JSON is malformed, has a wrongly typed field, or an unknown field.
    #[error("invalid profile patch: {0}")]
    InvalidPatch(#[from] serde_json::Error),
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
