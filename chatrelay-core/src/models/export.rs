//! Export document types.
//!
//! - [`ExportDocument`] - The JSON artifact written by an export and read by an import
//! - [`ExportMetadata`] - Message count and source URL

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::{ATTACHMENT_PLACEHOLDER, Attachment, Conversation, Message, Role};
use super::platform::PlatformKind;
use crate::error::CoreError;

// ============================================================================
// Export Document
// ============================================================================

/// Metadata block of an export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of exported messages.
    pub total_messages: usize,
    /// URL of the page the conversation was exported from.
    #[serde(default)]
    pub url: String,
}

/// A conversation exported from one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Source platform identifier.
    pub platform: PlatformKind,
    /// When the export was produced.
    pub export_date: DateTime<Utc>,
    /// Exported messages in document order.
    pub messages: Conversation,
    /// Export metadata.
    pub metadata: ExportMetadata,
}

impl ExportDocument {
    /// Builds an export document stamped now.
    pub fn new(platform: PlatformKind, messages: Conversation, url: impl Into<String>) -> Self {
        let total_messages = messages.len();
        Self {
            platform,
            export_date: Utc::now(),
            messages,
            metadata: ExportMetadata {
                total_messages,
                url: url.into(),
            },
        }
    }

    /// Returns the default file name for this export.
    ///
    /// Format: `chat-export-<platform>-<unix millis>.json`.
    pub fn file_name(&self) -> String {
        format!(
            "chat-export-{}-{}.json",
            self.platform.id(),
            self.export_date.timestamp_millis()
        )
    }

    /// Serializes the document as pretty JSON (two-space indent).
    pub fn to_pretty_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Import Parsing
// ============================================================================

/// Parses an import payload leniently into a conversation.
///
/// The payload must be a JSON object with a `messages` array. Other fields
/// (platform, metadata) are ignored so exports from older versions and
/// hand-written files load too. Within the array:
/// - non-object entries are skipped
/// - a missing role becomes `user`, other labels are folded
/// - content is trimmed; empty messages without attachments are dropped
/// - attachment-only messages get the `(attachment)` placeholder
pub fn parse_import(json: &str) -> Result<Conversation, CoreError> {
    let value: Value = serde_json::from_str(json)?;
    conversation_from_value(&value)
}

/// Same as [`parse_import`], for an already-parsed JSON value.
pub fn conversation_from_value(value: &Value) -> Result<Conversation, CoreError> {
    let Some(object) = value.as_object() else {
        return Err(CoreError::InvalidImportPayload(
            "expected JSON object with 'messages' array".to_string(),
        ));
    };
    let Some(messages) = object.get("messages") else {
        return Err(CoreError::InvalidImportPayload(
            "missing messages array".to_string(),
        ));
    };
    let Some(entries) = messages.as_array() else {
        return Err(CoreError::InvalidImportPayload(
            "'messages' must be an array".to_string(),
        ));
    };
    Ok(messages_from_values(entries))
}

/// Normalizes raw message values, skipping anything unusable.
pub fn messages_from_values(entries: &[Value]) -> Conversation {
    entries.iter().filter_map(message_from_value).collect()
}

fn message_from_value(entry: &Value) -> Option<Message> {
    let object = entry.as_object()?;

    let role = match object.get("role").and_then(Value::as_str) {
        Some(label) if !label.trim().is_empty() => Role::fold(label),
        _ => Role::User,
    };
    let content = object
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();

    let attachments: Vec<Attachment> = object
        .get("attachments")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|a| a.is_object())
                .filter_map(|a| serde_json::from_value(a.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    if content.is_empty() && attachments.is_empty() {
        return None;
    }

    let timestamp = object
        .get("timestamp")
        .and_then(Value::as_str)
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map_or_else(Utc::now, |ts| ts.with_timezone(&Utc));

    Some(Message {
        role,
        content: if content.is_empty() {
            ATTACHMENT_PLACEHOLDER.to_string()
        } else {
            content.to_string()
        },
        timestamp,
        attachments,
    })
}
