//! Gemini extract strategies.

use chatrelay_dom::StrategyKind;

use crate::common::{AlternationStrategy, RoleResolver, SelectorStrategy, UserCue};

const MESSAGE_CUES: &[UserCue] = &[
    UserCue::Ancestor(r#"[class*="user"]"#),
    UserCue::Ancestor(r#"[data-test-id*="user"]"#),
    UserCue::Descendant(r#"[class*="user"]"#),
];

/// Message-content blocks.
pub fn message_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "gemini.message_content",
        StrategyKind::Primary,
        r#".message-content, [class*="message"]"#,
    )
    .roles(RoleResolver::new().cues(MESSAGE_CUES))
}

/// `user-query` / `model-response` custom elements.
pub fn query_response_strategy() -> SelectorStrategy {
    SelectorStrategy::new(
        "gemini.query_response",
        StrategyKind::Secondary,
        "user-query, model-response",
    )
    .roles(RoleResolver::new().cues(&[UserCue::Ancestor("user-query")]))
}

/// Message/response `div`s in the main region, alternating roles.
pub fn paragraph_strategy() -> AlternationStrategy {
    AlternationStrategy::new(
        "gemini.paragraphs",
        r#"div[class*="message"], div[class*="response"]"#,
    )
    .regions(&[".conversation"])
    .longer_than(10)
}
