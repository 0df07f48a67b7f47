//! Extraction and delivery error types.

use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Extract Error
// ============================================================================

/// Error type for extraction and input location.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Every strategy yielded zero usable turns.
    #[error("No messages found. Make sure you have an active conversation.")]
    NoMessagesFound,

    /// Prose is present but could not be segmented into turns.
    #[error(
        "Could not automatically detect message structure. {platform} may have updated their interface."
    )]
    UnrecognizedLayout {
        /// Display name of the platform.
        platform: String,
    },

    /// No editable composer on the page.
    #[error("Could not find chat input box. Make sure you're on the chat page.")]
    InputNotFound,

    /// A selector in a platform table does not parse.
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The offending selector.
        selector: String,
        /// Parser message.
        reason: String,
    },

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] chatrelay_core::CoreError),
}

impl ExtractError {
    /// Builds an [`ExtractError::UnrecognizedLayout`] for a platform name.
    pub fn unrecognized(platform: impl Into<String>) -> Self {
        Self::UnrecognizedLayout {
            platform: platform.into(),
        }
    }
}

// ============================================================================
// Delivery Error
// ============================================================================

/// Error from a single delivery technique.
///
/// These never escape the delivery pipeline; they are recorded per step.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The target refused focus.
    #[error("Focus rejected: {0}")]
    FocusRejected(String),

    /// The target is not writable in the requested way.
    #[error("Target not writable: {0}")]
    NotWritable(String),

    /// The target dropped a synthetic event.
    #[error("Event rejected: {0}")]
    EventRejected(String),

    /// Technique disabled by settings.
    #[error("Disabled by settings")]
    Disabled,

    /// Clipboard failure.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

// ============================================================================
// Clipboard Error
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard tool is installed.
    #[error("No clipboard tool available (tried {0})")]
    NoTool(String),

    /// Access was denied.
    #[error("Clipboard access denied")]
    Denied,

    /// The tool ran and failed.
    #[error("Clipboard tool failed: {0}")]
    ToolFailed(String),

    /// Process error.
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),
}

// ============================================================================
// Process Error
// ============================================================================

/// Error type for process operations.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Command not found.
    #[error("Command not found: {0}")]
    NotFound(String),

    /// Command timed out.
    #[error("Command timed out after {0:?}")]
    Timeout(Duration),

    /// Non-zero exit code.
    #[error("Command exited with code {code}: {stderr}")]
    NonZeroExit {
        /// Exit code from the process.
        code: i32,
        /// Standard error output.
        stderr: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
