//! Poe extract strategies.

use chatrelay_dom::StrategyKind;

use crate::common::{
    AlternationStrategy, AttachmentScope, RoleResolver, SelectorStrategy, UserCue,
};

const ROLES: RoleResolver = RoleResolver::new().author_attrs(&["data-role"]).cues(&[
    UserCue::ClassToken("human"),
    UserCue::ClassToken("user"),
    UserCue::Descendant(r#"[class*="human"], [class*="user"]"#),
]);

/// Message-classed or `data-role` containers.
pub fn container_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "poe.containers",
        StrategyKind::Primary,
        r#"[class*="message"], [class*="Message"], [data-role]"#,
    )
    .roles(ROLES)
}

/// Chat, bot and human blocks, and bare articles.
pub fn block_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "poe.blocks",
        StrategyKind::Secondary,
        r#"[class*="chat"], [class*="bot"], [class*="human"], article"#,
    )
    .roles(ROLES)
}

/// Message, bubble and paragraph blocks in `main`, alternating roles.
pub fn paragraph_strategy() -> AlternationStrategy {
    AlternationStrategy::new(
        "poe.paragraphs",
        r#"[class*="message"], [class*="bubble"], p, [class*="content"]"#,
    )
    .attachments(AttachmentScope::ClosestDiv)
}
