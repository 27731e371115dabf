//! Error types for key validation.

use thiserror::Error;

/// Key validation errors.
#[derive(Debug, Error)]
pub enum KeysError {
    /// The value could not be converted to JSON for inspection.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for key validation.
pub type KeysResult<T> = Result<T, KeysError>;
