//! ChatGPT extract strategies.

use chatrelay_dom::StrategyKind;

use crate::common::{RoleResolver, SelectorStrategy, UserCue};

const AUTHOR_ATTRS: &[&str] = &["data-message-author-role"];

/// Conversation-turn articles (`data-testid="conversation-turn-N"`).
pub fn turn_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "chatgpt.turns",
        StrategyKind::Primary,
        r#"article[data-testid^="conversation-turn"]"#,
    )
    .content(&[".markdown", r#"[class*="prose"]"#])
    .roles(
        RoleResolver::new()
            .author_attrs(AUTHOR_ATTRS)
            .cues(&[UserCue::AttrContains("data-testid", "user")]),
    )
}

/// Any `article`, for layouts without test ids.
pub fn article_strategy() -> SelectorStrategy {
    SelectorStrategy::new("chatgpt.articles", StrategyKind::Secondary, "article")
        .roles(RoleResolver::new().author_attrs(AUTHOR_ATTRS))
}
