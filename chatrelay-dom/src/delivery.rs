//! Text delivery into a composer.
//!
//! Destination editors differ in which mechanism they honor, so delivery
//! runs a fixed sequence of independent techniques and applies all of them.
//! A failing technique is logged and recorded; it never stops the rest.
//!
//! Order:
//! 1. `focus`
//! 2. `clipboard`
//! 3. `synthetic-paste`
//! 4. `assign`
//! 5. `input-events`
//! 6. `paste-shortcut`

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::context::DeliveryContext;
use crate::error::DeliveryError;
use crate::host::target::{EditableTarget, KeyPhase, SyntheticEvent};

// ============================================================================
// Step Records
// ============================================================================

/// How a delivery step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// The technique ran without error.
    Ok,
    /// The technique raised an error (swallowed).
    Failed,
    /// The technique is disabled by settings.
    Skipped,
}

/// Record of a single delivery step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepAttempt {
    /// Technique ID.
    pub step: String,
    /// Outcome.
    pub status: StepStatus,
    /// Error message if the step failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

/// Everything that happened during one delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReport {
    /// When delivery started.
    pub started_at: DateTime<Utc>,
    /// Characters delivered.
    pub text_chars: usize,
    /// Steps in execution order.
    pub steps: Vec<StepAttempt>,
}

impl DeliveryReport {
    /// Returns the record of a step.
    pub fn step(&self, id: &str) -> Option<&StepAttempt> {
        self.steps.iter().find(|s| s.step == id)
    }

    /// Returns true if the step ran without error.
    pub fn succeeded(&self, id: &str) -> bool {
        self.step(id).is_some_and(|s| s.status == StepStatus::Ok)
    }

    /// Returns true if at least one step ran without error.
    pub fn any_succeeded(&self) -> bool {
        self.steps.iter().any(|s| s.status == StepStatus::Ok)
    }

    /// Returns true if the text reached the clipboard.
    pub fn clipboard_used(&self) -> bool {
        self.succeeded(steps::CLIPBOARD)
    }

    /// Failed steps.
    pub fn failures(&self) -> impl Iterator<Item = &StepAttempt> {
        self.steps.iter().filter(|s| s.status == StepStatus::Failed)
    }
}

/// Step identifiers.
pub mod steps {
    /// Focus the target.
    pub const FOCUS: &str = "focus";
    /// Copy to the system clipboard.
    pub const CLIPBOARD: &str = "clipboard";
    /// Dispatch a paste event.
    pub const SYNTHETIC_PASTE: &str = "synthetic-paste";
    /// Assign text or value.
    pub const ASSIGN: &str = "assign";
    /// Dispatch input and change events.
    pub const INPUT_EVENTS: &str = "input-events";
    /// Dispatch the paste keyboard shortcut.
    pub const PASTE_SHORTCUT: &str = "paste-shortcut";
}

// ============================================================================
// Delivery Technique Trait
// ============================================================================

/// One independently fallible way of getting text into a target.
#[async_trait]
pub trait DeliveryTechnique: Send + Sync {
    /// Step identifier.
    fn id(&self) -> &'static str;

    /// Whether settings allow this technique.
    fn is_enabled(&self, _ctx: &DeliveryContext) -> bool {
        true
    }

    /// Applies the technique.
    async fn apply(
        &self,
        text: &str,
        target: &mut dyn EditableTarget,
        ctx: &DeliveryContext,
    ) -> Result<(), DeliveryError>;
}

// ============================================================================
// Standard Techniques
// ============================================================================

/// Focuses the target.
#[derive(Debug, Default)]
pub struct FocusTechnique;

#[async_trait]
impl DeliveryTechnique for FocusTechnique {
    fn id(&self) -> &'static str {
        steps::FOCUS
    }

    async fn apply(
        &self,
        _text: &str,
        target: &mut dyn EditableTarget,
        _ctx: &DeliveryContext,
    ) -> Result<(), DeliveryError> {
        target.focus()
    }
}

/// Copies the text to the clipboard.
#[derive(Debug, Default)]
pub struct ClipboardTechnique;

#[async_trait]
impl DeliveryTechnique for ClipboardTechnique {
    fn id(&self) -> &'static str {
        steps::CLIPBOARD
    }

    fn is_enabled(&self, ctx: &DeliveryContext) -> bool {
        ctx.settings.clipboard
    }

    async fn apply(
        &self,
        text: &str,
        _target: &mut dyn EditableTarget,
        ctx: &DeliveryContext,
    ) -> Result<(), DeliveryError> {
        ctx.clipboard.write_text(text).await?;
        Ok(())
    }
}

/// Dispatches a paste event carrying the text as `text/plain`.
#[derive(Debug, Default)]
pub struct SyntheticPasteTechnique;

#[async_trait]
impl DeliveryTechnique for SyntheticPasteTechnique {
    fn id(&self) -> &'static str {
        steps::SYNTHETIC_PASTE
    }

    fn is_enabled(&self, ctx: &DeliveryContext) -> bool {
        ctx.settings.synthetic_paste
    }

    async fn apply(
        &self,
        text: &str,
        target: &mut dyn EditableTarget,
        _ctx: &DeliveryContext,
    ) -> Result<(), DeliveryError> {
        target.dispatch(SyntheticEvent::Paste {
            data: text.to_string(),
        })
    }
}

/// Sets text content or form value directly.
#[derive(Debug, Default)]
pub struct AssignTechnique;

#[async_trait]
impl DeliveryTechnique for AssignTechnique {
    fn id(&self) -> &'static str {
        steps::ASSIGN
    }

    async fn apply(
        &self,
        text: &str,
        target: &mut dyn EditableTarget,
        _ctx: &DeliveryContext,
    ) -> Result<(), DeliveryError> {
        if target.kind().is_form_field() {
            target.set_value(text)
        } else {
            target.set_text_content(text)
        }
    }
}

/// Dispatches `input` (insertText), a generic `input`, and `change`.
#[derive(Debug, Default)]
pub struct InputEventsTechnique;

#[async_trait]
impl DeliveryTechnique for InputEventsTechnique {
    fn id(&self) -> &'static str {
        steps::INPUT_EVENTS
    }

    async fn apply(
        &self,
        text: &str,
        target: &mut dyn EditableTarget,
        _ctx: &DeliveryContext,
    ) -> Result<(), DeliveryError> {
        target.dispatch(SyntheticEvent::insert_text(text))?;
        target.dispatch(SyntheticEvent::input())?;
        target.dispatch(SyntheticEvent::Change)
    }
}

/// Dispatches keydown/keypress/keyup for `v` with the paste modifier.
#[derive(Debug, Default)]
pub struct PasteShortcutTechnique;

#[async_trait]
impl DeliveryTechnique for PasteShortcutTechnique {
    fn id(&self) -> &'static str {
        steps::PASTE_SHORTCUT
    }

    fn is_enabled(&self, ctx: &DeliveryContext) -> bool {
        ctx.settings.paste_shortcut
    }

    async fn apply(
        &self,
        _text: &str,
        target: &mut dyn EditableTarget,
        ctx: &DeliveryContext,
    ) -> Result<(), DeliveryError> {
        for phase in [KeyPhase::Down, KeyPhase::Press, KeyPhase::Up] {
            target.dispatch(SyntheticEvent::Key {
                phase,
                key: "v".to_string(),
                modifier: ctx.settings.paste_modifier,
            })?;
        }
        Ok(())
    }
}

// ============================================================================
// Delivery Pipeline
// ============================================================================

/// A fixed sequence of delivery techniques.
pub struct DeliveryPipeline {
    techniques: Vec<Box<dyn DeliveryTechnique>>,
}

impl DeliveryPipeline {
    /// Creates a pipeline with the given techniques, run in the given order.
    pub fn with_techniques(techniques: Vec<Box<dyn DeliveryTechnique>>) -> Self {
        Self { techniques }
    }

    /// The six standard techniques in order.
    pub fn standard() -> Self {
        Self::with_techniques(vec![
            Box::new(FocusTechnique),
            Box::new(ClipboardTechnique),
            Box::new(SyntheticPasteTechnique),
            Box::new(AssignTechnique),
            Box::new(InputEventsTechnique),
            Box::new(PasteShortcutTechnique),
        ])
    }

    /// Technique IDs in execution order.
    pub fn step_ids(&self) -> Vec<&'static str> {
        self.techniques.iter().map(|t| t.id()).collect()
    }

    /// Runs every technique against the target. Never fails.
    #[instrument(skip(self, text, target, ctx), fields(chars = text.chars().count()))]
    pub async fn deliver(
        &self,
        text: &str,
        target: &mut dyn EditableTarget,
        ctx: &DeliveryContext,
    ) -> DeliveryReport {
        let mut report = DeliveryReport {
            started_at: Utc::now(),
            text_chars: text.chars().count(),
            steps: Vec::with_capacity(self.techniques.len()),
        };

        for technique in &self.techniques {
            let step = technique.id();

            if !technique.is_enabled(ctx) {
                debug!(step, "Step disabled");
                report.steps.push(StepAttempt {
                    step: step.to_string(),
                    status: StepStatus::Skipped,
                    error: None,
                    duration_ms: 0,
                });
                continue;
            }

            let start = Instant::now();
            let result = technique.apply(text, &mut *target, ctx).await;
            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match result {
                Ok(()) => {
                    debug!(step, duration_ms, "Step applied");
                    report.steps.push(StepAttempt {
                        step: step.to_string(),
                        status: StepStatus::Ok,
                        error: None,
                        duration_ms,
                    });
                }
                Err(error) => {
                    warn!(step, error = %error, "Step failed");
                    report.steps.push(StepAttempt {
                        step: step.to_string(),
                        status: StepStatus::Failed,
                        error: Some(error.to_string()),
                        duration_ms,
                    });
                }
            }
        }

        info!(
            ok = report.steps.iter().filter(|s| s.status == StepStatus::Ok).count(),
            failed = report.failures().count(),
            "Delivery attempted"
        );
        report
    }
}

impl Default for DeliveryPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for DeliveryPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryPipeline")
            .field("techniques", &self.step_ids())
            .finish()
    }
}
