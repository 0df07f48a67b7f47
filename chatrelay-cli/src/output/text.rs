//! Text output formatting with colors.

use chatrelay_adapters::AdapterDescriptor;
use chatrelay_core::ExportDocument;
use chatrelay_dom::{DeliveryReport, StepAttempt, StepStatus};
use chrono::Local;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Wraps `text` in `color` when colors are on.
pub(crate) fn paint(use_colors: bool, color: &str, text: &str) -> String {
    if use_colors {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ========================================================================
    // Platforms
    // ========================================================================

    /// Formats the platform table header.
    pub fn format_platforms_header(&self) -> String {
        format!(
            "{:<12} {:<12} {:<9} {}",
            self.bold("Platform"),
            self.bold("Id"),
            self.bold("Selectors"),
            self.bold("Hosts")
        )
    }

    /// Formats a single platform line.
    pub fn format_platform_line(&self, desc: &AdapterDescriptor) -> String {
        let selectors = if desc.extract_plan.site_specific {
            self.green("site")
        } else {
            self.dim("generic")
        };

        format!(
            "{:<12} {:<12} {:<9} {}",
            desc.display_name(),
            desc.id.id(),
            selectors,
            desc.routes.hosts.join(", ")
        )
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Formats the summary of a written export.
    pub fn format_export(&self, document: &ExportDocument, strategy: Option<&str>, path: &str) -> String {
        let mut lines = vec![format!(
            "{} Exported {} messages from {}",
            self.green("✓"),
            document.metadata.total_messages,
            self.bold(document.platform.display_name())
        )];
        if let Some(strategy) = strategy {
            lines.push(format!("  Strategy: {}", self.dim(strategy)));
        }
        lines.push(format!(
            "  Date:     {}",
            document
                .export_date
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(format!("  File:     {}", self.cyan(path)));
        lines.join("\n")
    }

    // ========================================================================
    // Delivery
    // ========================================================================

    /// Formats a delivery report, one line per step.
    pub fn format_delivery_report(&self, input: &str, report: &DeliveryReport) -> String {
        let mut lines = vec![format!(
            "Delivered {} chars into {}",
            report.text_chars,
            self.bold(input)
        )];
        lines.extend(report.steps.iter().map(|step| self.format_step(step)));
        lines.join("\n")
    }

    /// Formats one delivery step.
    pub fn format_step(&self, step: &StepAttempt) -> String {
        match step.status {
            StepStatus::Ok => format!("  {} {}", self.green("✓"), step.step),
            StepStatus::Skipped => format!("  {} {}", self.dim("−"), self.dim(&step.step)),
            StepStatus::Failed => format!(
                "  {} {} {}",
                self.red("✗"),
                step.step,
                self.dim(&format!("({})", step.error.as_deref().unwrap_or("failed")))
            ),
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        paint(self.use_colors, color, text)
    }
}
