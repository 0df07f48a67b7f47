//! Claude adapter descriptor.

use chatrelay_core::PlatformKind;
use chatrelay_dom::{ExtractPipeline, ExtractSettings};

use super::strategies::{body_strategy, probe_strategy, render_count_strategy};
use crate::descriptor::{AdapterDescriptor, ExtractPlan};

/// Composer selectors, tried in order.
pub const INPUT_SELECTORS: &[&str] = &[
    r#"div[contenteditable="true"]"#,
    "textarea",
    r#"[role="textbox"]"#,
];

/// Creates the Claude adapter descriptor.
pub fn claude_descriptor() -> AdapterDescriptor {
    AdapterDescriptor::builder(PlatformKind::Claude)
        .hosts(&["claude.ai"])
        .extract_plan(ExtractPlan {
            site_specific: true,
            build_pipeline: build_claude_pipeline,
        })
        .input_selectors(INPUT_SELECTORS)
        .build()
}

/// Builds the Claude extract pipeline.
fn build_claude_pipeline(_settings: &ExtractSettings) -> ExtractPipeline {
    ExtractPipeline::with_strategies(vec![
        Box::new(render_count_strategy()),
        Box::new(body_strategy()),
        Box::new(probe_strategy()),
    ])
}
