//! Terminal notices.

use chatrelay_core::{UiSink, import_notice};

use crate::output::{GREEN, YELLOW, paint};

/// Prints import notices for a person at a terminal.
///
/// Notices go to stderr so stdout stays clean for JSON output.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    quiet: bool,
    use_colors: bool,
}

impl TerminalSink {
    /// Creates a sink.
    pub fn new(quiet: bool, use_colors: bool) -> Self {
        Self { quiet, use_colors }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        paint(self.use_colors, color, text)
    }
}

impl UiSink for TerminalSink {
    fn import_succeeded(&self, count: usize, clipboard_hint: bool) {
        if !self.quiet {
            eprintln!("{}", self.paint(GREEN, &import_notice(count, clipboard_hint)));
        }
    }

    fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.paint(YELLOW, &format!("Warning: {message}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(TerminalSink::new(false, false).paint(GREEN, "ok"), "ok");
        assert_eq!(TerminalSink::new(false, true).paint(GREEN, "ok"), format!("{GREEN}ok\x1b[0m"));
        assert_eq!(
            TerminalSink::new(true, true).paint(YELLOW, "careful"),
            "\x1b[33mcareful\x1b[0m"
        );
    }
}
