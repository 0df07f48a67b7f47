//! Extraction strategy trait and types.
//!
//! A strategy is one way of reading a conversation out of a page. Each
//! platform has several (a precise selector, a looser one, a generic
//! fallback) that are tried in priority order.

use std::fmt;

use chatrelay_core::Conversation;
use serde::{Deserialize, Serialize};

use crate::context::ExtractContext;
use crate::error::ExtractError;

// ============================================================================
// Strategy Kind
// ============================================================================

/// The tier a strategy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Most specific turn-container selector.
    Primary,
    /// Looser class/attribute pattern.
    Secondary,
    /// Paragraph scan with role alternation.
    Generic,
    /// Detects prose that could not be segmented.
    Probe,
}

impl StrategyKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Generic => "Generic",
            Self::Probe => "Probe",
        }
    }

    /// Default priority for this kind (higher = try first).
    pub fn default_priority(&self) -> u32 {
        match self {
            Self::Primary => 100,
            Self::Secondary => 60,
            Self::Generic => 20,
            Self::Probe => 0,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Extract Result
// ============================================================================

/// The result of a successful extraction.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// Extracted conversation (never empty).
    pub conversation: Conversation,
    /// The strategy that succeeded.
    pub strategy_id: String,
    /// The kind of strategy used.
    pub kind: StrategyKind,
}

impl ExtractResult {
    /// Creates a new extract result.
    pub fn new(conversation: Conversation, strategy_id: impl Into<String>, kind: StrategyKind) -> Self {
        Self {
            conversation,
            strategy_id: strategy_id.into(),
            kind,
        }
    }
}

// ============================================================================
// Extract Strategy Trait
// ============================================================================

/// A strategy for extracting a conversation from a page.
///
/// Returning an empty conversation means "nothing recognized here" and
/// lets the pipeline move on.
pub trait ExtractStrategy: Send + Sync {
    /// Unique identifier (e.g., "claude.render_count").
    ///
    /// Format: `{platform}.{method}`
    fn id(&self) -> &str;

    /// The tier this strategy belongs to.
    fn kind(&self) -> StrategyKind;

    /// Whether this strategy may run under the given context.
    ///
    /// Generic strategies are skipped when generic fallback is disabled.
    fn is_available(&self, ctx: &ExtractContext<'_>) -> bool {
        self.kind() != StrategyKind::Generic || ctx.settings.generic_fallback
    }

    /// Extracts messages.
    fn extract(&self, ctx: &ExtractContext<'_>) -> Result<Conversation, ExtractError>;

    /// Whether to try the next strategy after this error.
    fn should_fallback(&self, error: &ExtractError) -> bool {
        !matches!(error, ExtractError::UnrecognizedLayout { .. })
    }

    /// Priority of this strategy (higher = try first).
    fn priority(&self) -> u32 {
        self.kind().default_priority()
    }
}

// ============================================================================
// Strategy Info
// ============================================================================

/// Information about a strategy (for reporting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Strategy ID.
    pub id: String,
    /// Strategy kind.
    pub kind: StrategyKind,
    /// Priority.
    pub priority: u32,
}

impl StrategyInfo {
    /// Creates strategy info from a strategy implementation.
    pub fn from_strategy(strategy: &dyn ExtractStrategy) -> Self {
        Self {
            id: strategy.id().to_string(),
            kind: strategy.kind(),
            priority: strategy.priority(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities_descend() {
        let kinds = [
            StrategyKind::Primary,
            StrategyKind::Secondary,
            StrategyKind::Generic,
            StrategyKind::Probe,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].default_priority() > pair[1].default_priority());
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(StrategyKind::Generic.to_string(), "Generic");
    }
}
