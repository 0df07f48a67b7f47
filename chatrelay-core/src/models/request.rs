//! Request/response envelope exchanged with a page adapter.
//!
//! - [`Request`] - `exportChat` or `importChat`
//! - [`Response`] - messages, success, or error

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::export::messages_from_values;
use super::message::Conversation;

/// Inbound request, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Extract the conversation of the current page.
    ExportChat,
    /// Deliver a conversation into the current page's input.
    ImportChat {
        /// Messages to render when no condensed prompt is supplied.
        ///
        /// Kept as raw values and normalized with the import rules.
        #[serde(default)]
        messages: Vec<Value>,
        /// Prompt delivered verbatim when present and non-empty.
        #[serde(
            default,
            rename = "condensedPrompt",
            skip_serializing_if = "Option::is_none"
        )]
        condensed_prompt: Option<String>,
    },
}

impl Request {
    /// Builds an import request from a conversation.
    pub fn import(conversation: &Conversation, condensed_prompt: Option<String>) -> Self {
        let messages = conversation
            .iter()
            .filter_map(|m| serde_json::to_value(m).ok())
            .collect();
        Self::ImportChat {
            messages,
            condensed_prompt,
        }
    }

    /// Returns the action name.
    pub fn action(&self) -> &'static str {
        match self {
            Self::ExportChat => "exportChat",
            Self::ImportChat { .. } => "importChat",
        }
    }

    /// Returns the normalized conversation of an import request.
    pub fn import_conversation(&self) -> Conversation {
        match self {
            Self::ExportChat => Conversation::new(),
            Self::ImportChat { messages, .. } => messages_from_values(messages),
        }
    }

    /// Returns the condensed prompt if present and non-empty.
    pub fn condensed_prompt(&self) -> Option<&str> {
        match self {
            Self::ImportChat {
                condensed_prompt: Some(prompt),
                ..
            } if !prompt.is_empty() => Some(prompt),
            _ => None,
        }
    }
}

/// Outbound response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Extracted messages.
    Messages {
        /// Conversation in document order.
        messages: Conversation,
    },
    /// Delivery attempted.
    Success {
        /// Always `true`.
        success: bool,
    },
    /// Human-readable failure.
    Error {
        /// Error message.
        error: String,
    },
}

impl Response {
    /// Successful import response.
    pub fn success() -> Self {
        Self::Success { success: true }
    }

    /// Error response from anything displayable.
    pub fn error(err: impl std::fmt::Display) -> Self {
        Self::Error {
            error: err.to_string(),
        }
    }

    /// Returns true unless this is an error response.
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Error { .. })
    }
}
