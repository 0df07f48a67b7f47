//! System clipboard access.
//!
//! The clipboard is an opaque capability behind [`ClipboardApi`]. The
//! system implementation pipes text into the first available OS tool.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::ClipboardError;
use crate::host::process::ProcessRunner;

// ============================================================================
// Clipboard Tools
// ============================================================================

/// An OS tool that copies stdin to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    /// Binary name.
    pub command: &'static str,
    /// Arguments selecting the clipboard selection.
    pub args: &'static [&'static str],
}

/// Tools tried in order: macOS, Wayland, then X11.
pub const CLIPBOARD_TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        command: "pbcopy",
        args: &[],
    },
    ClipboardTool {
        command: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        command: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        command: "xsel",
        args: &["--clipboard", "--input"],
    },
];

// ============================================================================
// Clipboard API
// ============================================================================

/// Write access to a clipboard.
#[async_trait]
pub trait ClipboardApi: Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Copies `text` to the clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

// ============================================================================
// System Clipboard
// ============================================================================

/// Clipboard backed by `pbcopy`, `wl-copy`, `xclip` or `xsel`.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    process: ProcessRunner,
}

impl SystemClipboard {
    /// Creates a new system clipboard.
    pub fn new() -> Self {
        Self {
            process: ProcessRunner::new(),
        }
    }

    /// Returns the first installed tool.
    pub fn available_tool(&self) -> Option<ClipboardTool> {
        CLIPBOARD_TOOLS
            .iter()
            .copied()
            .find(|tool| self.process.command_exists(tool.command))
    }
}

#[async_trait]
impl ClipboardApi for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    #[instrument(skip(self, text), fields(len = text.len()))]
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let Some(tool) = self.available_tool() else {
            let tried: Vec<_> = CLIPBOARD_TOOLS.iter().map(|t| t.command).collect();
            return Err(ClipboardError::NoTool(tried.join(", ")));
        };

        debug!(tool = tool.command, "Copying to clipboard");
        let output = self
            .process
            .run_with_stdin(tool.command, tool.args, text)
            .await?;

        if output.success() {
            Ok(())
        } else {
            Err(ClipboardError::ToolFailed(format!(
                "{} exited with code {}",
                tool.command, output.exit_code
            )))
        }
    }
}

// ============================================================================
// Memory Clipboard
// ============================================================================

/// In-process clipboard that remembers the last write.
///
/// Used when the system clipboard is disabled and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    denied: bool,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects every write.
    pub fn denied() -> Self {
        Self {
            contents: Mutex::new(None),
            denied: true,
        }
    }

    /// Returns the last written text.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl ClipboardApi for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Denied);
        }
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::ToolFailed("clipboard lock poisoned".to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}
