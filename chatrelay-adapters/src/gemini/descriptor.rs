//! Gemini adapter descriptor.

use chatrelay_core::PlatformKind;
use chatrelay_dom::{ExtractPipeline, ExtractSettings};

use super::strategies::{message_strategy, paragraph_strategy, query_response_strategy};
use crate::descriptor::{AdapterDescriptor, ExtractPlan};

/// Composer selectors, tried in order.
pub const INPUT_SELECTORS: &[&str] = &[
    "rich-textarea",
    "textarea",
    r#"[contenteditable="true"]"#,
    r#"[role="textbox"]"#,
    ".ql-editor",
    "[data-placeholder]",
];

/// Creates the Gemini adapter descriptor.
pub fn gemini_descriptor() -> AdapterDescriptor {
    AdapterDescriptor::builder(PlatformKind::Gemini)
        .hosts(&["gemini.google.com"])
        .extract_plan(ExtractPlan {
            site_specific: true,
            build_pipeline: build_gemini_pipeline,
        })
        .input_selectors(INPUT_SELECTORS)
        .build()
}

/// Builds the Gemini extract pipeline.
fn build_gemini_pipeline(_settings: &ExtractSettings) -> ExtractPipeline {
    ExtractPipeline::with_strategies(vec![
        Box::new(message_strategy()),
        Box::new(query_response_strategy()),
        Box::new(paragraph_strategy()),
    ])
}
