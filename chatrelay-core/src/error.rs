//! Core error types for ChatRelay.

use thiserror::Error;

/// Core error type for ChatRelay operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Import payload is not an export document.
    #[error("Invalid chat export file ({0})")]
    InvalidImportPayload(String),

    /// Unknown platform identifier.
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
