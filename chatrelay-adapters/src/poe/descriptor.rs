//! Poe adapter descriptor.

use chatrelay_core::PlatformKind;
use chatrelay_dom::{ExtractPipeline, ExtractSettings};

use super::strategies::{block_strategy, container_strategy, paragraph_strategy};
use crate::descriptor::{AdapterDescriptor, ExtractPlan};

/// Composer selectors, tried in order.
pub const INPUT_SELECTORS: &[&str] = &[
    "textarea",
    r#"[contenteditable="true"]"#,
    r#"[role="textbox"]"#,
    r#"input[type="text"]"#,
];

/// Creates the Poe adapter descriptor.
pub fn poe_descriptor() -> AdapterDescriptor {
    AdapterDescriptor::builder(PlatformKind::Poe)
        .hosts(&["poe.com"])
        .extract_plan(ExtractPlan {
            site_specific: true,
            build_pipeline: build_poe_pipeline,
        })
        .input_selectors(INPUT_SELECTORS)
        .build()
}

/// Builds the Poe extract pipeline.
fn build_poe_pipeline(_settings: &ExtractSettings) -> ExtractPipeline {
    ExtractPipeline::with_strategies(vec![
        Box::new(container_strategy()),
        Box::new(block_strategy()),
        Box::new(paragraph_strategy()),
    ])
}
