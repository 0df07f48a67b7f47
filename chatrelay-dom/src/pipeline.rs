//! Extraction pipeline for executing strategies in order.
//!
//! The pipeline takes a platform's strategies and runs them in priority
//! order until one yields at least one message.

use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::context::ExtractContext;
use crate::error::ExtractError;
use crate::strategy::{ExtractResult, ExtractStrategy, StrategyInfo, StrategyKind};

// ============================================================================
// Extract Attempt
// ============================================================================

/// Record of a single strategy attempt.
#[derive(Debug, Clone)]
pub struct ExtractAttempt {
    /// The strategy ID that was attempted.
    pub strategy_id: String,
    /// The kind of strategy.
    pub kind: StrategyKind,
    /// Number of messages produced.
    pub messages: usize,
    /// Error if the attempt failed.
    pub error: Option<String>,
    /// How long the attempt took.
    pub duration: Duration,
}

impl ExtractAttempt {
    /// Returns true if the attempt produced messages.
    pub fn success(&self) -> bool {
        self.error.is_none() && self.messages > 0
    }
}

// ============================================================================
// Extract Outcome
// ============================================================================

/// The outcome of a pipeline execution.
#[derive(Debug)]
pub struct ExtractOutcome {
    /// The result (success or final error).
    pub result: Result<ExtractResult, ExtractError>,
    /// All attempts made.
    pub attempts: Vec<ExtractAttempt>,
    /// Total duration of all attempts.
    pub duration: Duration,
}

impl ExtractOutcome {
    /// Returns true if extraction succeeded.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the number of strategies that were tried.
    pub fn attempts_count(&self) -> usize {
        self.attempts.len()
    }

    /// Returns the successful strategy ID, if any.
    pub fn successful_strategy(&self) -> Option<&str> {
        self.result.as_ref().ok().map(|r| r.strategy_id.as_str())
    }

    /// Converts into the plain result.
    pub fn into_result(self) -> Result<ExtractResult, ExtractError> {
        self.result
    }
}

// ============================================================================
// Extract Pipeline
// ============================================================================

/// A pipeline of extraction strategies tried in order.
pub struct ExtractPipeline {
    strategies: Vec<Box<dyn ExtractStrategy>>,
}

impl ExtractPipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Creates a pipeline with the given strategies.
    pub fn with_strategies(strategies: Vec<Box<dyn ExtractStrategy>>) -> Self {
        let mut pipeline = Self { strategies };
        pipeline.sort_by_priority();
        pipeline
    }

    /// Adds a strategy to the pipeline.
    pub fn add_strategy(&mut self, strategy: Box<dyn ExtractStrategy>) {
        self.strategies.push(strategy);
        self.sort_by_priority();
    }

    /// Sorts strategies by priority (highest first), keeping insertion
    /// order among equals.
    fn sort_by_priority(&mut self) {
        self.strategies
            .sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Returns the number of strategies in the pipeline.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy IDs in evaluation order.
    pub fn strategy_ids(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.id()).collect()
    }

    /// Returns information about all strategies.
    pub fn strategy_info(&self) -> Vec<StrategyInfo> {
        self.strategies
            .iter()
            .map(|s| StrategyInfo::from_strategy(s.as_ref()))
            .collect()
    }

    /// Execute the pipeline, trying strategies until one yields messages.
    #[instrument(skip(self, ctx), fields(platform = %ctx.platform, strategies = self.strategies.len()))]
    pub fn execute(&self, ctx: &ExtractContext<'_>) -> ExtractOutcome {
        let start = Instant::now();
        let mut attempts = Vec::new();

        info!(count = self.strategies.len(), "Executing extract pipeline");

        for strategy in &self.strategies {
            let strategy_id = strategy.id();
            let kind = strategy.kind();

            if !strategy.is_available(ctx) {
                debug!(strategy = %strategy_id, "Strategy disabled, skipping");
                continue;
            }

            let attempt_start = Instant::now();
            debug!(strategy = %strategy_id, kind = %kind, "Executing strategy");

            match strategy.extract(ctx) {
                Ok(conversation) if !conversation.is_empty() => {
                    let duration = attempt_start.elapsed();
                    info!(
                        strategy = %strategy_id,
                        messages = conversation.len(),
                        duration = ?duration,
                        "Strategy succeeded"
                    );
                    attempts.push(ExtractAttempt {
                        strategy_id: strategy_id.to_string(),
                        kind,
                        messages: conversation.len(),
                        error: None,
                        duration,
                    });
                    return ExtractOutcome {
                        result: Ok(ExtractResult::new(conversation, strategy_id, kind)),
                        attempts,
                        duration: start.elapsed(),
                    };
                }
                Ok(_) => {
                    debug!(strategy = %strategy_id, "Strategy yielded no messages");
                    attempts.push(ExtractAttempt {
                        strategy_id: strategy_id.to_string(),
                        kind,
                        messages: 0,
                        error: None,
                        duration: attempt_start.elapsed(),
                    });
                }
                Err(error) => {
                    let duration = attempt_start.elapsed();
                    warn!(
                        strategy = %strategy_id,
                        error = %error,
                        duration = ?duration,
                        "Strategy failed"
                    );
                    attempts.push(ExtractAttempt {
                        strategy_id: strategy_id.to_string(),
                        kind,
                        messages: 0,
                        error: Some(error.to_string()),
                        duration,
                    });

                    if !strategy.should_fallback(&error) {
                        debug!(strategy = %strategy_id, "Strategy indicates no fallback");
                        return ExtractOutcome {
                            result: Err(error),
                            attempts,
                            duration: start.elapsed(),
                        };
                    }
                }
            }
        }

        warn!("No strategy found messages");
        ExtractOutcome {
            result: Err(ExtractError::NoMessagesFound),
            attempts,
            duration: start.elapsed(),
        }
    }
}

impl Default for ExtractPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExtractPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractPipeline")
            .field("strategies", &self.strategy_ids())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
