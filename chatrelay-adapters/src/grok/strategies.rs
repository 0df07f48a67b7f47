//! Grok extract strategies.

use chatrelay_dom::StrategyKind;

use crate::common::{
    AlternationStrategy, AttachmentScope, RoleResolver, SelectorStrategy, UserCue,
};

const ROLES: RoleResolver = RoleResolver::new()
    .author_attrs(&["data-role"])
    .cues(&[UserCue::ClassToken("user"), UserCue::ClassToken("human")]);

/// Message-classed or `data-role` containers.
pub fn container_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "grok.containers",
        StrategyKind::Primary,
        r#"[class*="message"], [class*="Message"], [data-role]"#,
    )
    .roles(ROLES)
}

/// Elements whose class names mention a role.
pub fn role_class_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "grok.role_classes",
        StrategyKind::Secondary,
        r#"[class*="user"], [class*="assistant"], [class*="human"]"#,
    )
    .roles(ROLES)
    .min_chars(2)
}

/// Paragraph-like blocks in `main`, alternating roles.
pub fn paragraph_strategy() -> AlternationStrategy {
    AlternationStrategy::new(
        "grok.paragraphs",
        r#"p, [class*="content"], [class*="text"]"#,
    )
    .attachments(AttachmentScope::Parent)
}
