//! Claude extract strategies.

use chatrelay_dom::StrategyKind;

use crate::common::{AttachmentScope, ProseProbeStrategy, RoleResolver, SelectorStrategy};

const USER_FLAG: &str = "data-is-user-message";

/// Turns carrying `data-test-render-count`.
pub fn render_count_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "claude.render_count",
        StrategyKind::Primary,
        "[data-test-render-count]",
    )
    .content(&[".font-claude-message", r#"[class*="prose"]"#])
    .roles(RoleResolver::new().user_flag(USER_FLAG))
}

/// Bare `.font-claude-message` bodies.
pub fn body_strategy() -> SelectorStrategy {
    SelectorStrategy::new("claude.message_body", StrategyKind::Secondary, ".font-claude-message")
        .roles(RoleResolver::new().user_flag(USER_FLAG))
        .attachments(AttachmentScope::ClosestDiv)
}

/// Unsegmented prose in `main`.
pub fn probe_strategy() -> ProseProbeStrategy {
    ProseProbeStrategy::new("claude.prose_probe")
}
