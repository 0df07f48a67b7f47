//! Adapter resolution and dispatch errors.

use chatrelay_dom::ExtractError;
use thiserror::Error;

/// Error type for adapter lookup and request handling.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// No adapter serves the URL.
    #[error("Unsupported page: {0}")]
    UnsupportedUrl(String),

    /// No adapter has this platform id.
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// The request JSON did not parse.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// Extraction or input location failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
