// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # ChatRelay Core
//!
//! Core types, models, and pure algorithms for ChatRelay.
//!
//! This crate provides the foundational abstractions used across all other
//! ChatRelay crates:
//!
//! - The canonical transcript model
//! - Error types
//! - The full-transcript continuation prompt
//! - The budget-bounded condensation engine
//! - The [`UiSink`] capability for user-facing notices
//!
//! ## Key Types
//!
//! ### Transcript Types
//! - [`Role`] - Binary author role (platform labels are folded into it)
//! - [`Attachment`] - Image or file referenced by a turn
//! - [`Message`] - One turn
//! - [`Conversation`] - Ordered turns in document order
//!
//! ### Platform & Wire Types
//! - [`PlatformKind`] - Supported chat products
//! - [`ExportDocument`] - Exported conversation artifact
//! - [`Request`] / [`Response`] - Envelope handled by a page adapter

pub mod condense;
pub mod error;
pub mod models;
pub mod render;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    ATTACHMENT_PLACEHOLDER, Attachment, AttachmentKind, Conversation, ExportDocument,
    ExportMetadata, INLINE_IMAGE_SENTINEL, MAX_ATTACHMENT_NAME_CHARS, Message, PlatformKind,
    Request, Response, Role, conversation_from_value, messages_from_values, parse_import,
};

// Re-export algorithms
pub use condense::{CondenseProfile, DEFAULT_BUDGET, condense, truncate};
pub use render::render_continuation_prompt;

// Re-export traits
pub use traits::{NullSink, PASTE_HINT, UiSink, import_notice};
