//! Host APIs for extraction and delivery.
//!
//! - [`document`] - Parsed page snapshots with light-DOM queries
//! - [`target`] - Editable delivery targets and synthetic events
//! - [`clipboard`] - System clipboard access
//! - [`process`] - Subprocess execution for clipboard tools

pub mod clipboard;
pub mod document;
pub mod process;
pub mod target;

// Re-export key types
pub use clipboard::{ClipboardApi, MemoryClipboard, SystemClipboard};
pub use document::PageDocument;
pub use process::{ProcessOutput, ProcessRunner};
pub use target::{EditableTarget, KeyPhase, PasteModifier, SnapshotTarget, SyntheticEvent, TargetKind};
