//! Trait definitions for ChatRelay.
//!
//! The only side effect the core cares about besides the page itself is
//! telling the user what happened. Surfaces (the CLI, tests) plug in a
//! [`UiSink`].

/// Standing hint shown when delivery relied on the clipboard.
pub const PASTE_HINT: &str = "If the text didn't appear, click the input and press Ctrl+V to paste.";

/// Receives user-facing notices.
pub trait UiSink: Send + Sync {
    /// Called after an import delivery was attempted.
    ///
    /// `clipboard_hint` is true when the clipboard step ran and the user may
    /// have to finish the paste themselves.
    fn import_succeeded(&self, count: usize, clipboard_hint: bool);

    /// Called for non-fatal warnings.
    fn warn(&self, _message: &str) {}
}

/// Formats the import success notice.
pub fn import_notice(count: usize, clipboard_hint: bool) -> String {
    if clipboard_hint {
        format!("✓ Imported {count} messages! {PASTE_HINT}")
    } else {
        format!("✓ Imported {count} messages! Review and send.")
    }
}

/// A sink that drops every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl UiSink for NullSink {
    fn import_succeeded(&self, _count: usize, _clipboard_hint: bool) {}
}
