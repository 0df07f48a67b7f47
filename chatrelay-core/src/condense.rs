//! Budget-bounded conversation condensation.
//!
//! Folds an arbitrarily long conversation into a continuation prompt that
//! never exceeds a character budget. Three tiers are tried in order:
//!
//! 1. The full profile: topic, attachment note, up to five key points from
//!    the middle of the conversation, and the last exchange.
//! 2. The reduced profile: same layout without key points and with tighter
//!    truncation limits.
//! 3. A hard cut of the reduced rendering followed by [`SHORT_NOTICE`].
//!
//! All lengths are counted in Unicode scalar values.

use crate::models::{Conversation, Message};
use crate::render::attachment_suffix;

/// Default character budget.
pub const DEFAULT_BUDGET: usize = 4000;

/// Result for an empty conversation.
pub const EMPTY_CONVERSATION: &str = "No conversation to condense.";

/// Notice appended after a hard cut.
pub const SHORT_NOTICE: &str = "\n\nContinue from here.";

/// Characters reserved for the notice when hard-cutting.
const HARD_CUT_RESERVE: usize = 25;

const HEADER: &str = "Context from a previous conversation (continue from here):\n";
const ATTACHMENT_NOTE: &str = "(Conversation included images or file attachments.)\n";
const KEY_POINTS_HEADING: &str = "Key points from the middle of the conversation:";
const LAST_EXCHANGE_HEADING: &str = "Last exchange:";
const FOOTER: &str = "---\nPlease continue from where we left off.";

const ELLIPSIS: &str = "...";
const MAX_KEY_POINTS: usize = 5;
const KEY_POINT_MIN_CHARS: usize = 10;
const KEY_POINT_MAX_CHARS: usize = 100;

// ============================================================================
// Truncation
// ============================================================================

/// Truncates `text` to at most `max_len` characters.
///
/// Unchanged when short enough; otherwise the first `max_len - 3` characters
/// with trailing whitespace trimmed, followed by `...`. Idempotent.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return text.chars().take(max_len).collect();
    }
    let head: String = text.chars().take(max_len - ELLIPSIS.len()).collect();
    format!("{}{ELLIPSIS}", head.trim_end())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ============================================================================
// Profiles
// ============================================================================

/// Rendering limits for one condensation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CondenseProfile {
    /// Whether key points from the middle are rendered.
    pub key_points: bool,
    /// Topic truncation limit.
    pub topic_chars: usize,
    /// Last-exchange truncation limit per message.
    pub exchange_chars: usize,
}

impl CondenseProfile {
    /// First tier.
    pub const FULL: Self = Self {
        key_points: true,
        topic_chars: 300,
        exchange_chars: 800,
    };

    /// Second tier.
    pub const REDUCED: Self = Self {
        key_points: false,
        topic_chars: 250,
        exchange_chars: 500,
    };
}

/// Facts about a conversation the renderer needs.
struct Outline<'a> {
    topic: &'a str,
    last_user: Option<&'a Message>,
    last_assistant: Option<&'a Message>,
    has_attachments: bool,
    key_points: Vec<String>,
}

impl<'a> Outline<'a> {
    fn of(conversation: &'a Conversation) -> Self {
        let messages = conversation.messages();
        let n = messages.len();

        let mut key_points = Vec::new();
        if n > 4 {
            for message in &messages[1..n.saturating_sub(2).max(1)] {
                let content = message.content.trim();
                if char_len(content) >= KEY_POINT_MIN_CHARS {
                    key_points.push(truncate(content, KEY_POINT_MAX_CHARS));
                }
            }
        }

        Self {
            topic: conversation
                .first_user()
                .map(|m| m.content.trim())
                .unwrap_or_default(),
            last_user: conversation.last_user(),
            last_assistant: conversation.last_assistant(),
            has_attachments: conversation.has_attachments(),
            key_points,
        }
    }

    fn render(&self, profile: CondenseProfile) -> String {
        let mut parts: Vec<String> = vec![HEADER.to_string()];

        if !self.topic.is_empty() {
            parts.push(format!(
                "Topic / goal: {}\n",
                truncate(self.topic, profile.topic_chars)
            ));
        }
        if self.has_attachments {
            parts.push(ATTACHMENT_NOTE.to_string());
        }
        if profile.key_points && !self.key_points.is_empty() {
            parts.push(KEY_POINTS_HEADING.to_string());
            for point in self.key_points.iter().take(MAX_KEY_POINTS) {
                parts.push(format!("  • {point}"));
            }
            parts.push(String::new());
        }

        parts.push(LAST_EXCHANGE_HEADING.to_string());
        if let Some(line) = exchange_line("Me", self.last_user, profile.exchange_chars) {
            parts.push(line);
        }
        if let Some(line) = exchange_line("Assistant", self.last_assistant, profile.exchange_chars) {
            parts.push(line);
        }
        parts.push(String::new());
        parts.push(FOOTER.to_string());

        parts.join("\n").trim().to_string()
    }
}

fn exchange_line(speaker: &str, message: Option<&Message>, limit: usize) -> Option<String> {
    let message = message?;
    let content = message.content.trim();
    if content.is_empty() && !message.has_attachments() {
        return None;
    }
    Some(format!(
        "  {speaker}: {}{}",
        truncate(content, limit),
        attachment_suffix(Some(message))
    ))
}

// ============================================================================
// Condense
// ============================================================================

/// Condenses a conversation into a prompt of at most `budget` characters.
///
/// The bound holds for every `budget >= 25`; smaller budgets still never
/// overflow but may lose the continuation notice.
pub fn condense(conversation: &Conversation, budget: usize) -> String {
    if conversation.is_empty() {
        return EMPTY_CONVERSATION.to_string();
    }

    let outline = Outline::of(conversation);

    let full = outline.render(CondenseProfile::FULL);
    if char_len(&full) <= budget {
        return full;
    }

    let reduced = outline.render(CondenseProfile::REDUCED);
    if char_len(&reduced) <= budget {
        return reduced;
    }

    if budget < HARD_CUT_RESERVE {
        return truncate(&reduced, budget);
    }
    let head: String = reduced.chars().take(budget - HARD_CUT_RESERVE).collect();
    format!("{}{SHORT_NOTICE}", head.trim_end())
}

/// Condenses with [`DEFAULT_BUDGET`].
pub fn condense_default(conversation: &Conversation) -> String {
    condense(conversation, DEFAULT_BUDGET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attachment, Role};

    fn sort_conversation() -> Conversation {
        vec![
            Message::text(Role::User, "How do I sort a list?"),
            Message::text(Role::Assistant, "Use a comparison-based sort..."),
            Message::text(Role::User, "What about stability?"),
            Message::text(Role::Assistant, "Use a stable algorithm like merge sort."),
        ]
        .into()
    }

    #[test]
    fn test_truncate_short_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello    world", 9), "hello...");
    }

    #[test]
    fn test_truncate_tiny_limits() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_counts_chars() {
        let s = "ééééééééé";
        let t = truncate(s, 5);
        assert_eq!(t, "éé...");
        assert_eq!(t.chars().count(), 5);
    }

    #[test]
    fn test_empty_conversation() {
        assert_eq!(condense(&Conversation::new(), 4000), EMPTY_CONVERSATION);
    }

    #[test]
    fn test_sort_scenario_default_budget() {
        let out = condense(&sort_conversation(), 4000);
        assert!(out.contains("Topic / goal: How do I sort a list?"));
        assert!(out.contains("Me: What about stability?"));
        assert!(out.contains("Assistant: Use a stable algorithm like merge sort."));
        assert!(out.starts_with("Context from a previous conversation"));
        assert!(out.ends_with("Please continue from where we left off."));
        assert!(out.chars().count() <= 4000);
        // four messages never produce key points
        assert!(!out.contains("Key points"));
    }

    #[test]
    fn test_sort_scenario_tiny_budget() {
        let out = condense(&sort_conversation(), 40);
        assert!(out.chars().count() <= 40);
        assert!(out.ends_with(SHORT_NOTICE));
    }

    #[test]
    fn test_exact_layout() {
        let out = condense(&sort_conversation(), 4000);
        let expected = concat!(
            "Context from a previous conversation (continue from here):\n\n",
            "Topic / goal: How do I sort a list?\n\n",
            "Last exchange:\n",
            "  Me: What about stability?\n",
            "  Assistant: Use a stable algorithm like merge sort.\n\n",
            "---\nPlease continue from where we left off."
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_key_points_from_interior() {
        let conv: Conversation = vec![
            Message::text(Role::User, "Plan a trip to Japan"),
            Message::text(Role::Assistant, "Sure, which cities interest you?"),
            Message::text(Role::User, "ok"),
            Message::text(Role::Assistant, "Kyoto has many temples worth visiting."),
            Message::text(Role::User, "What about food?"),
            Message::text(Role::Assistant, "Try ramen in Tokyo."),
        ]
        .into();
        let out = condense(&conv, 4000);
        assert!(out.contains("Key points from the middle of the conversation:"));
        assert!(out.contains("  • Sure, which cities interest you?"));
        assert!(out.contains("  • Kyoto has many temples worth visiting."));
        // too short
        assert!(!out.contains("  • ok"));
        // last two messages are not interior
        assert!(!out.contains("  • What about food?"));
    }

    #[test]
    fn test_key_points_capped_at_five() {
        let mut messages = vec![Message::text(Role::User, "topic message here")];
        for i in 0..10 {
            messages.push(Message::text(Role::Assistant, format!("interior point number {i}")));
        }
        messages.push(Message::text(Role::User, "last question"));
        messages.push(Message::text(Role::Assistant, "last answer"));
        let out = condense(&messages.into(), 4000);
        assert_eq!(out.matches("  • ").count(), 5);
    }

    #[test]
    fn test_attachment_note_and_refs() {
        let conv: Conversation = vec![
            Message::from_turn(Role::User, "", vec![Attachment::image("data:image/png;base64,AA")]).unwrap(),
            Message::text(Role::Assistant, "Nice picture."),
        ]
        .into();
        let out = condense(&conv, 4000);
        assert!(out.contains("(Conversation included images or file attachments.)"));
        assert!(out.contains("  Me: (attachment) [Attachments: [inline image]]"));
    }

    #[test]
    fn test_reduced_profile_drops_key_points() {
        let long = "x".repeat(900);
        let mut messages = vec![Message::text(Role::User, long.clone())];
        for _ in 0..4 {
            messages.push(Message::text(Role::Assistant, long.clone()));
        }
        messages.push(Message::text(Role::User, long.clone()));
        messages.push(Message::text(Role::Assistant, long));
        let conv: Conversation = messages.into();

        let full = condense(&conv, 10_000);
        assert!(full.contains("Key points"));

        let budget = full.chars().count() - 1;
        let reduced = condense(&conv, budget);
        assert!(!reduced.contains("Key points"));
        assert!(reduced.chars().count() <= budget);
        assert!(reduced.ends_with("Please continue from where we left off."));
    }

    #[test]
    fn test_no_user_messages() {
        let conv: Conversation = vec![Message::text(Role::Assistant, "Hello! How can I help?")].into();
        let out = condense(&conv, 4000);
        assert!(!out.contains("Topic / goal"));
        assert!(!out.contains("  Me:"));
        assert!(out.contains("  Assistant: Hello! How can I help?"));
    }

    #[test]
    fn test_budget_below_reserve_never_overflows() {
        for budget in 0..25 {
            let out = condense(&sort_conversation(), budget);
            assert!(out.chars().count() <= budget, "budget {budget}");
        }
    }
}
