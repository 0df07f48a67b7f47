//! CLI output formatting tests.
//!
//! These tests verify that CLI output is correctly formatted for both
//! text and JSON output modes.

use chatrelay_adapters::AdapterRegistry;
use chatrelay_core::{ExportDocument, Message, PlatformKind, Role};
use chatrelay_dom::{DeliveryReport, StepAttempt, StepStatus};
use chrono::Utc;

fn step(id: &str, status: StepStatus, error: Option<&str>) -> StepAttempt {
    StepAttempt {
        step: id.to_string(),
        status,
        error: error.map(String::from),
        duration_ms: 0,
    }
}

fn report() -> DeliveryReport {
    DeliveryReport {
        started_at: Utc::now(),
        text_chars: 42,
        steps: vec![
            step("focus", StepStatus::Ok, None),
            step("clipboard", StepStatus::Failed, Some("Clipboard access denied")),
            step("synthetic-paste", StepStatus::Skipped, None),
        ],
    }
}

fn document() -> ExportDocument {
    let messages = vec![
        Message::text(Role::User, "Hello"),
        Message::text(Role::Assistant, "Hi!"),
    ]
    .into();
    ExportDocument::new(PlatformKind::ChatGpt, messages, "https://chatgpt.com/c/1")
}

mod text_formatter_tests {
    use super::*;
    use crate::output::TextFormatter;

    #[test]
    fn test_delivery_report_without_colors() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_delivery_report("<textarea> (textarea)", &report());

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Delivered 42 chars into <textarea> (textarea)");
        assert_eq!(lines[1], "  ✓ focus");
        assert_eq!(lines[2], "  ✗ clipboard (Clipboard access denied)");
        assert_eq!(lines[3], "  − synthetic-paste");
    }

    #[test]
    fn test_delivery_report_with_colors() {
        let formatter = TextFormatter::new(true);
        let output = formatter.format_delivery_report("input", &report());
        assert!(output.contains("\x1b[32m✓"));
        assert!(output.contains("\x1b[31m✗"));
    }

    #[test]
    fn test_platform_line() {
        let formatter = TextFormatter::new(false);

        let claude = AdapterRegistry::get(PlatformKind::Claude).unwrap();
        let line = formatter.format_platform_line(claude);
        assert!(line.starts_with("Claude"));
        assert!(line.contains("site"));
        assert!(line.ends_with("claude.ai"));

        let copilot = AdapterRegistry::get(PlatformKind::Copilot).unwrap();
        let line = formatter.format_platform_line(copilot);
        assert!(line.contains("generic"));
        assert!(line.ends_with("copilot.microsoft.com, bing.com"));
    }

    #[test]
    fn test_export_summary() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_export(&document(), Some("chatgpt.turns"), "out.json");

        assert!(output.starts_with("✓ Exported 2 messages from ChatGPT"));
        assert!(output.contains("Strategy: chatgpt.turns"));
        assert!(output.contains("File:     out.json"));
    }
}

mod json_formatter_tests {
    use super::*;
    use crate::output::{ExportOutput, JsonFormatter};

    #[test]
    fn test_platforms_json() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_platforms(AdapterRegistry::all()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let platforms = value.as_array().unwrap();
        assert_eq!(platforms.len(), PlatformKind::all().len());
        assert_eq!(platforms[0]["id"], "claude");
        assert!(platforms[0]["strategies"].as_array().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn test_import_json() {
        let formatter = JsonFormatter::new(false);
        let output = formatter
            .format_import("gemini", "<textarea>".to_string(), 2, true, &report())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["platform"], "gemini");
        assert_eq!(value["condensed"], true);
        assert_eq!(value["deliveredChars"], 42);
        assert_eq!(value["clipboardUsed"], false);
        assert_eq!(value["steps"][1]["status"], "failed");
        assert_eq!(value["steps"][1]["error"], "Clipboard access denied");
    }

    #[test]
    fn test_export_json() {
        let document = document();
        let output = ExportOutput::new(&document, Some("chatgpt.turns"), Some("out.json".into()));
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["platform"], "chatgpt");
        assert_eq!(value["totalMessages"], 2);
        assert_eq!(value["path"], "out.json");
    }
}
