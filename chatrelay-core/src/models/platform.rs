//! Platform-related types.
//!
//! - [`PlatformKind`] - Enum of supported AI chat products

use serde::{Deserialize, Serialize};

// ============================================================================
// Platform Kind
// ============================================================================

/// Supported AI chat platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// Anthropic Claude (claude.ai)
    Claude,
    /// OpenAI ChatGPT (chatgpt.com, chat.openai.com)
    #[serde(rename = "chatgpt")]
    ChatGpt,
    /// Google Gemini (gemini.google.com)
    Gemini,
    /// xAI Grok (grok.com)
    Grok,
    /// Perplexity (perplexity.ai)
    Perplexity,
    /// Microsoft Copilot (copilot.microsoft.com, bing.com)
    Copilot,
    /// Quora Poe (poe.com)
    Poe,
    /// Meta AI (meta.ai)
    Meta,
    /// You.com
    You,
}

impl PlatformKind {
    /// Returns the stable identifier used in URLs, file names and the CLI.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::ChatGpt => "chatgpt",
            Self::Gemini => "gemini",
            Self::Grok => "grok",
            Self::Perplexity => "perplexity",
            Self::Copilot => "copilot",
            Self::Poe => "poe",
            Self::Meta => "meta",
            Self::You => "you",
        }
    }

    /// Returns the display name for this platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Claude => "Claude",
            Self::ChatGpt => "ChatGPT",
            Self::Gemini => "Gemini",
            Self::Grok => "Grok",
            Self::Perplexity => "Perplexity",
            Self::Copilot => "Copilot",
            Self::Poe => "Poe",
            Self::Meta => "Meta AI",
            Self::You => "You.com",
        }
    }

    /// Returns the URL a new conversation on this platform starts at.
    pub fn home_url(&self) -> &'static str {
        match self {
            Self::Claude => "https://claude.ai/new",
            Self::ChatGpt => "https://chatgpt.com/",
            Self::Gemini => "https://gemini.google.com/app",
            Self::Grok => "https://grok.com/",
            Self::Perplexity => "https://www.perplexity.ai/",
            Self::Copilot => "https://copilot.microsoft.com/",
            Self::Poe => "https://poe.com/",
            Self::Meta => "https://www.meta.ai/",
            Self::You => "https://you.com/",
        }
    }

    /// Returns true if the platform has a site-specific extraction chain.
    pub fn has_site_strategies(&self) -> bool {
        matches!(
            self,
            Self::Claude | Self::ChatGpt | Self::Gemini | Self::Grok | Self::Poe
        )
    }

    /// Returns all supported platforms.
    pub fn all() -> &'static [PlatformKind] {
        &[
            Self::Claude,
            Self::ChatGpt,
            Self::Gemini,
            Self::Grok,
            Self::Perplexity,
            Self::Copilot,
            Self::Poe,
            Self::Meta,
            Self::You,
        ]
    }

    /// Looks a platform up by its identifier (case-insensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|k| k.id() == id)
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
