//! ChatGPT adapter descriptor.

use chatrelay_core::PlatformKind;
use chatrelay_dom::{ExtractPipeline, ExtractSettings};

use super::strategies::{article_strategy, turn_strategy};
use crate::descriptor::{AdapterDescriptor, ExtractPlan};

/// Composer selectors, tried in order.
pub const INPUT_SELECTORS: &[&str] = &[
    "textarea[data-id]",
    "textarea",
    r#"[contenteditable="true"]"#,
    r#"[role="textbox"]"#,
    "form textarea",
    r#"form [contenteditable="true"]"#,
    r#"[placeholder*="Ask"]"#,
    r#"[placeholder*="Message"]"#,
    r#"[id*="prompt"]"#,
    r#"[data-id*="input"]"#,
    "textarea[placeholder]",
    r#"[contenteditable="true"][data-placeholder]"#,
];

/// Creates the ChatGPT adapter descriptor.
pub fn chatgpt_descriptor() -> AdapterDescriptor {
    AdapterDescriptor::builder(PlatformKind::ChatGpt)
        .hosts(&["chatgpt.com", "chat.openai.com"])
        .extract_plan(ExtractPlan {
            site_specific: true,
            build_pipeline: build_chatgpt_pipeline,
        })
        .input_selectors(INPUT_SELECTORS)
        .build()
}

/// Builds the ChatGPT extract pipeline.
fn build_chatgpt_pipeline(_settings: &ExtractSettings) -> ExtractPipeline {
    ExtractPipeline::with_strategies(vec![
        Box::new(turn_strategy()),
        Box::new(article_strategy()),
    ])
}
