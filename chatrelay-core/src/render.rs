//! Full-transcript continuation prompt.

use crate::models::{Conversation, Message};

/// Fixed opening of every continuation prompt.
pub const PROMPT_HEADER: &str = "Here's my previous conversation that I want to continue:\n\n---\n\n";

/// Fixed closing of every continuation prompt.
pub const PROMPT_FOOTER: &str = "---\n\nPlease continue from where we left off.";

/// Formats ` [Attachments: a, b]` for a message, or an empty string.
pub fn attachment_suffix(message: Option<&Message>) -> String {
    let Some(message) = message else {
        return String::new();
    };
    let refs = message.attachment_refs();
    if refs.is_empty() {
        String::new()
    } else {
        format!(" [Attachments: {}]", refs.join(", "))
    }
}

/// Renders the whole conversation as a speaker-labeled prompt.
///
/// Total and deterministic; an empty conversation renders header and footer.
pub fn render_continuation_prompt(conversation: &Conversation) -> String {
    let mut out = String::from(PROMPT_HEADER);
    for message in conversation {
        out.push_str(message.role.speaker());
        out.push_str(": ");
        out.push_str(&message.content);
        out.push_str(&attachment_suffix(Some(message)));
        out.push_str("\n\n");
    }
    out.push_str(PROMPT_FOOTER);
    out
}
