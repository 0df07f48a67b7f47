//! Message-related types.
//!
//! This module contains the canonical chat transcript model:
//! - [`Role`] - Binary author role of a turn
//! - [`Attachment`] - Image or file referenced by a turn
//! - [`Message`] - One turn of a conversation
//! - [`Conversation`] - Ordered sequence of turns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel recorded instead of an embedded `data:` URI.
pub const INLINE_IMAGE_SENTINEL: &str = "[inline image]";

/// Placeholder content for turns that only carry attachments.
pub const ATTACHMENT_PLACEHOLDER: &str = "(attachment)";

/// Maximum length of an attachment name, in characters.
pub const MAX_ATTACHMENT_NAME_CHARS: usize = 80;

// ============================================================================
// Role
// ============================================================================

/// Author role of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,
    /// The AI side of the conversation.
    Assistant,
}

impl Role {
    /// Folds a platform-specific author label into the binary role.
    ///
    /// `user`, `human` and `me` map to [`Role::User`]; everything else
    /// (`assistant`, `model`, `bot`, `system`, ...) maps to [`Role::Assistant`].
    pub fn fold(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "user" | "human" | "me" => Self::User,
            _ => Self::Assistant,
        }
    }

    /// Returns the speaker label used in continuation prompts.
    pub fn speaker(&self) -> &'static str {
        match self {
            Self::User => "Me",
            Self::Assistant => "Assistant",
        }
    }

    /// Returns the opposite role.
    pub fn flipped(self) -> Self {
        match self {
            Self::User => Self::Assistant,
            Self::Assistant => Self::User,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

// ============================================================================
// Attachment
// ============================================================================

/// Kind of attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// An `<img>` found inside the turn.
    Image,
    /// A downloadable link found inside the turn.
    File,
}

/// An image or file referenced by a chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment kind.
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    /// Resolvable URL, blob reference, or [`INLINE_IMAGE_SENTINEL`].
    #[serde(default)]
    pub url: String,
    /// Best-effort display name (at most 80 characters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Attachment {
    /// Creates an image attachment from an `src` value.
    ///
    /// Embedded `data:` URIs are replaced by [`INLINE_IMAGE_SENTINEL`].
    pub fn image(src: &str) -> Self {
        let src = src.trim();
        let url = if src.starts_with("data:") {
            INLINE_IMAGE_SENTINEL.to_string()
        } else {
            src.to_string()
        };
        Self {
            kind: AttachmentKind::Image,
            url,
            name: None,
        }
    }

    /// Creates a file attachment from a link target and a display name.
    pub fn file(href: &str, name: &str) -> Self {
        let name: String = name.trim().chars().take(MAX_ATTACHMENT_NAME_CHARS).collect();
        Self {
            kind: AttachmentKind::File,
            url: href.trim().to_string(),
            name: Some(name),
        }
    }

    /// Returns true if the original source was an embedded data URI.
    pub fn is_inline(&self) -> bool {
        self.url == INLINE_IMAGE_SENTINEL
    }

    /// Returns the reference used in prompts: the URL, else the name.
    pub fn reference(&self) -> Option<&str> {
        if !self.url.is_empty() {
            return Some(&self.url);
        }
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

// ============================================================================
// Message
// ============================================================================

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Author role.
    pub role: Role,
    /// Trimmed visible text of the turn.
    pub content: String,
    /// When the turn was extracted (not when it was sent).
    pub timestamp: DateTime<Utc>,
    /// Images and files found in the turn.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Builds a message from extracted turn text and attachments.
    ///
    /// Returns `None` when the turn has neither text nor attachments.
    /// A turn with attachments but no text gets [`ATTACHMENT_PLACEHOLDER`].
    pub fn from_turn(role: Role, text: &str, attachments: Vec<Attachment>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() && attachments.is_empty() {
            return None;
        }
        let content = if text.is_empty() {
            ATTACHMENT_PLACEHOLDER.to_string()
        } else {
            text.to_string()
        };
        Some(Self {
            role,
            content,
            timestamp: Utc::now(),
            attachments,
        })
    }

    /// Creates a text-only message stamped now.
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
            attachments: Vec::new(),
        }
    }

    /// Adds an attachment (builder style).
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Returns true if this message carries attachments.
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Returns the non-empty attachment references of this message.
    pub fn attachment_refs(&self) -> Vec<&str> {
        self.attachments
            .iter()
            .filter_map(Attachment::reference)
            .collect()
    }
}

// ============================================================================
// Conversation
// ============================================================================

/// An ordered sequence of messages in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterates messages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Consumes the conversation, returning its messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// First message authored by the user.
    pub fn first_user(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.role == Role::User)
    }

    /// Last message authored by the user.
    pub fn last_user(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == Role::User)
    }

    /// Last message authored by the assistant.
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == Role::Assistant)
    }

    /// Returns true if any message carries attachments.
    pub fn has_attachments(&self) -> bool {
        self.messages.iter().any(Message::has_attachments)
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl FromIterator<Message> for Conversation {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_fold() {
        assert_eq!(Role::fold("user"), Role::User);
        assert_eq!(Role::fold("Human"), Role::User);
        assert_eq!(Role::fold("assistant"), Role::Assistant);
        assert_eq!(Role::fold("model"), Role::Assistant);
        assert_eq!(Role::fold("system"), Role::Assistant);
        assert_eq!(Role::fold(""), Role::Assistant);
    }

    #[test]
    fn test_data_uri_becomes_sentinel() {
        let att = Attachment::image("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(att.url, INLINE_IMAGE_SENTINEL);
        assert!(att.is_inline());
        assert_eq!(att.kind, AttachmentKind::Image);
    }

    #[test]
    fn test_file_name_truncated() {
        let long = "x".repeat(200);
        let att = Attachment::file("blob:https://chat/1", &long);
        assert_eq!(att.name.as_ref().unwrap().chars().count(), 80);
    }

    #[test]
    fn test_reference_prefers_url() {
        let att = Attachment::file("blob:abc", "report.pdf");
        assert_eq!(att.reference(), Some("blob:abc"));

        let att = Attachment::file("", "report.pdf");
        assert_eq!(att.reference(), Some("report.pdf"));

        let att = Attachment::file("", "  ");
        assert_eq!(att.reference(), None);
    }

    #[test]
    fn test_from_turn_drops_empty() {
        assert!(Message::from_turn(Role::User, "   ", vec![]).is_none());
    }

    #[test]
    fn test_from_turn_attachment_only() {
        let msg = Message::from_turn(Role::User, "", vec![Attachment::image("a.png")]).unwrap();
        assert_eq!(msg.content, ATTACHMENT_PLACEHOLDER);
        assert_eq!(msg.attachments.len(), 1);
    }

    #[test]
    fn test_from_turn_trims() {
        let msg = Message::from_turn(Role::Assistant, "  hello \n", vec![]).unwrap();
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_conversation_lookups() {
        let conv: Conversation = vec![
            Message::text(Role::User, "first"),
            Message::text(Role::Assistant, "a1"),
            Message::text(Role::User, "second"),
            Message::text(Role::Assistant, "a2"),
        ]
        .into();

        assert_eq!(conv.first_user().unwrap().content, "first");
        assert_eq!(conv.last_user().unwrap().content, "second");
        assert_eq!(conv.last_assistant().unwrap().content, "a2");
        assert!(!conv.has_attachments());
    }
}
