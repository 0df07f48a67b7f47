//! Grok adapter descriptor.

use chatrelay_core::PlatformKind;
use chatrelay_dom::{ExtractPipeline, ExtractSettings};

use super::strategies::{container_strategy, paragraph_strategy, role_class_strategy};
use crate::descriptor::{AdapterDescriptor, ExtractPlan};

/// Composer selectors, tried in order.
pub const INPUT_SELECTORS: &[&str] = &[
    "textarea",
    r#"[contenteditable="true"]"#,
    r#"[role="textbox"]"#,
    r#"input[type="text"]"#,
];

/// Creates the Grok adapter descriptor.
pub fn grok_descriptor() -> AdapterDescriptor {
    AdapterDescriptor::builder(PlatformKind::Grok)
        .hosts(&["grok.com"])
        .extract_plan(ExtractPlan {
            site_specific: true,
            build_pipeline: build_grok_pipeline,
        })
        .input_selectors(INPUT_SELECTORS)
        .build()
}

/// Builds the Grok extract pipeline.
fn build_grok_pipeline(_settings: &ExtractSettings) -> ExtractPipeline {
    ExtractPipeline::with_strategies(vec![
        Box::new(container_strategy()),
        Box::new(role_class_strategy()),
        Box::new(paragraph_strategy()),
    ])
}
