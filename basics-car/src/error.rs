//! Error types for car age computation.

use thiserror::Error;

/// Car-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarError {
    /// Textual year has no leading integer.
    #[error("invalid year format: {0:?}")]
    InvalidYearFormat(String),

    /// Textual year has a leading integer too large to represent.
    #[error("year out of range: {0:?}")]
    YearOutOfRange(String),
}

/// Result type for car operations.
pub type CarResult<T> = Result<T, CarError>;
