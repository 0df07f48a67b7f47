//! Domain models for ChatRelay.
//!
//! ## Submodules
//!
//! - [`message`] - Transcript types (Role, Attachment, Message, Conversation)
//! - [`platform`] - Supported chat platforms
//! - [`export`] - Export document and lenient import parsing
//! - [`request`] - Request/response envelope

mod export;
mod message;
mod platform;
mod request;

pub use export::{
    ExportDocument, ExportMetadata, conversation_from_value, messages_from_values, parse_import,
};
pub use message::{
    ATTACHMENT_PLACEHOLDER, Attachment, AttachmentKind, Conversation, INLINE_IMAGE_SENTINEL,
    MAX_ATTACHMENT_NAME_CHARS, Message, Role,
};
pub use platform::PlatformKind;
pub use request::{Request, Response};
