//! Descriptors for the generic-chain platforms.

use chatrelay_core::PlatformKind;
use chatrelay_dom::{ExtractPipeline, ExtractSettings, StrategyKind};

use crate::common::{AlternationStrategy, RoleResolver, SelectorStrategy, UserCue};
use crate::descriptor::{AdapterDescriptor, ExtractPlan};

/// Composer selectors, tried in order.
pub const INPUT_SELECTORS: &[&str] = &[
    "textarea",
    r#"[contenteditable="true"]"#,
    r#"[role="textbox"]"#,
    r#"input[type="text"]"#,
];

/// Creates the Perplexity adapter descriptor.
pub fn perplexity_descriptor() -> AdapterDescriptor {
    generic_descriptor(PlatformKind::Perplexity, &["perplexity.ai"])
}

/// Creates the Copilot adapter descriptor.
pub fn copilot_descriptor() -> AdapterDescriptor {
    generic_descriptor(PlatformKind::Copilot, &["copilot.microsoft.com", "bing.com"])
}

/// Creates the Meta AI adapter descriptor.
pub fn meta_descriptor() -> AdapterDescriptor {
    generic_descriptor(PlatformKind::Meta, &["meta.ai"])
}

/// Creates the You.com adapter descriptor.
pub fn you_descriptor() -> AdapterDescriptor {
    generic_descriptor(PlatformKind::You, &["you.com"])
}

fn generic_descriptor(id: PlatformKind, hosts: &'static [&'static str]) -> AdapterDescriptor {
    AdapterDescriptor::builder(id)
        .hosts(hosts)
        .extract_plan(ExtractPlan {
            site_specific: false,
            build_pipeline: generic_pipeline,
        })
        .input_selectors(INPUT_SELECTORS)
        .build()
}

/// Builds the shared generic extract pipeline.
pub fn generic_pipeline(_settings: &ExtractSettings) -> ExtractPipeline {
    ExtractPipeline::with_strategies(vec![
        Box::new(
            SelectorStrategy::new(
                "generic.author_attrs",
                StrategyKind::Primary,
                "[data-message-author-role], [data-role]",
            )
            .roles(RoleResolver::new().author_attrs(&["data-message-author-role", "data-role"])),
        ),
        Box::new(
            SelectorStrategy::new(
                "generic.message_classes",
                StrategyKind::Secondary,
                r#"[class*="message"]"#,
            )
            .roles(
                RoleResolver::new()
                    .cues(&[UserCue::ClassToken("user"), UserCue::ClassToken("human")]),
            ),
        ),
        Box::new(AlternationStrategy::new("generic.paragraphs", "p")),
    ])
}
