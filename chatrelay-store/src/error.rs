//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export document could not be produced.
    #[error(transparent)]
    Core(#[from] chatrelay_core::CoreError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown settings key.
    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    /// Value that does not fit the key.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Settings key.
        key: String,
        /// Rejected value.
        value: String,
    },
}

impl StoreError {
    /// Returns true for errors caused by the caller's input rather than the disk.
    pub fn is_user_error(&self) -> bool {
        matches!(self, StoreError::UnknownKey(_) | StoreError::InvalidValue { .. })
    }
}
