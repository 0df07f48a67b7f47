//! JSON output formatting.

use anyhow::Result;
use chatrelay_adapters::{AdapterDescriptor, AdapterSummary};
use chatrelay_core::ExportDocument;
use chatrelay_dom::{DeliveryReport, StepAttempt};
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for an export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutput {
    pub platform: String,
    pub total_messages: usize,
    pub export_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ExportOutput {
    /// Builds the output for a written export.
    pub fn new(document: &ExportDocument, strategy: Option<&str>, path: Option<String>) -> Self {
        Self {
            platform: document.platform.id().to_string(),
            total_messages: document.metadata.total_messages,
            export_date: document.export_date.to_rfc3339(),
            strategy: strategy.map(String::from),
            path,
        }
    }
}

/// JSON output for an import.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutput {
    pub platform: String,
    pub input: String,
    pub messages: usize,
    pub condensed: bool,
    pub delivered_chars: usize,
    pub clipboard_used: bool,
    pub steps: Vec<StepAttempt>,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats the platform list.
    pub fn format_platforms(&self, adapters: &[AdapterDescriptor]) -> Result<String> {
        let summaries: Vec<AdapterSummary> = adapters.iter().map(AdapterDescriptor::summary).collect();
        self.format(&summaries)
    }

    /// Formats an import result.
    pub fn format_import(
        &self,
        platform: &str,
        input: String,
        messages: usize,
        condensed: bool,
        report: &DeliveryReport,
    ) -> Result<String> {
        self.format(&ImportOutput {
            platform: platform.to_string(),
            input,
            messages,
            condensed,
            delivered_chars: report.text_chars,
            clipboard_used: report.clipboard_used(),
            steps: report.steps.clone(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }
}
