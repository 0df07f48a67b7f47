//! Editable delivery targets.
//!
//! An [`EditableTarget`] is the composer element text gets delivered into.
//! The page itself is opaque, so the trait exposes only what delivery
//! techniques need: focus, two ways of assigning text, and synthetic events.
//! [`SnapshotTarget`] is the in-process implementation; it applies each
//! operation to an owned model of the located element and records it.

use serde::{Deserialize, Serialize};

use crate::error::DeliveryError;

// ============================================================================
// Target Kind
// ============================================================================

/// What kind of editable element a target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// `<textarea>`.
    TextArea,
    /// Text-like `<input>`.
    TextInput,
    /// Element with `contenteditable`.
    ContentEditable,
    /// Element declaring `role="textbox"`.
    TextBox,
}

impl TargetKind {
    /// Returns true if text is assigned through `value`.
    pub fn is_form_field(&self) -> bool {
        matches!(self, Self::TextArea | Self::TextInput)
    }
}

// ============================================================================
// Synthetic Events
// ============================================================================

/// Keyboard modifier used for the paste shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasteModifier {
    /// Control key.
    Ctrl,
    /// Command key.
    Meta,
}

impl PasteModifier {
    /// Modifier for the current OS: Meta on macOS, Ctrl elsewhere.
    pub fn for_current_os() -> Self {
        if cfg!(target_os = "macos") {
            Self::Meta
        } else {
            Self::Ctrl
        }
    }
}

/// Keyboard event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPhase {
    /// `keydown`.
    Down,
    /// `keypress`.
    Press,
    /// `keyup`.
    Up,
}

/// An event dispatched at the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyntheticEvent {
    /// Paste event carrying `text/plain` data.
    Paste {
        /// Clipboard payload.
        data: String,
    },
    /// `input` event; `insertText` carries data, the generic form does not.
    Input {
        /// `inputType`, if any.
        input_type: Option<String>,
        /// `data`, if any.
        data: Option<String>,
    },
    /// `change` event.
    Change,
    /// Keyboard event.
    Key {
        /// Phase.
        phase: KeyPhase,
        /// Key value.
        key: String,
        /// Held modifier.
        modifier: PasteModifier,
    },
}

impl SyntheticEvent {
    /// `input` event with `inputType = insertText`.
    pub fn insert_text(text: &str) -> Self {
        Self::Input {
            input_type: Some("insertText".to_string()),
            data: Some(text.to_string()),
        }
    }

    /// Generic `input` event.
    pub fn input() -> Self {
        Self::Input {
            input_type: None,
            data: None,
        }
    }

    /// DOM event type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Paste { .. } => "paste",
            Self::Input { .. } => "input",
            Self::Change => "change",
            Self::Key {
                phase: KeyPhase::Down,
                ..
            } => "keydown",
            Self::Key {
                phase: KeyPhase::Press,
                ..
            } => "keypress",
            Self::Key {
                phase: KeyPhase::Up,
                ..
            } => "keyup",
        }
    }
}

// ============================================================================
// Editable Target
// ============================================================================

/// An element that can receive delivered text.
pub trait EditableTarget: Send {
    /// What kind of element this is.
    fn kind(&self) -> TargetKind;

    /// Focuses the element.
    fn focus(&mut self) -> Result<(), DeliveryError>;

    /// Sets text content (content-editable targets).
    fn set_text_content(&mut self, text: &str) -> Result<(), DeliveryError>;

    /// Sets the form value (text areas and inputs).
    fn set_value(&mut self, text: &str) -> Result<(), DeliveryError>;

    /// Dispatches a synthetic event.
    fn dispatch(&mut self, event: SyntheticEvent) -> Result<(), DeliveryError>;
}

// ============================================================================
// Snapshot Target
// ============================================================================

/// In-process target that models a located element.
#[derive(Debug, Clone)]
pub struct SnapshotTarget {
    kind: TargetKind,
    description: String,
    focused: bool,
    text: String,
    events: Vec<SyntheticEvent>,
    read_only: bool,
    detached: bool,
}

impl SnapshotTarget {
    /// Creates a target of the given kind with empty text.
    pub fn new(kind: TargetKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            focused: false,
            text: String::new(),
            events: Vec::new(),
            read_only: false,
            detached: false,
        }
    }

    /// Starts with existing text in the element.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Makes every text assignment fail.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Makes focus and event dispatch fail, as for a removed element.
    #[must_use]
    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    /// Short description of the element (tag and selector).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true once focused.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current text of the element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Events dispatched so far.
    pub fn events(&self) -> &[SyntheticEvent] {
        &self.events
    }

    /// Event type names dispatched so far.
    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.iter().map(SyntheticEvent::type_name).collect()
    }

    fn assign(&mut self, text: &str, via_value: bool) -> Result<(), DeliveryError> {
        if self.read_only {
            return Err(DeliveryError::NotWritable(self.description.clone()));
        }
        if via_value != self.kind.is_form_field() {
            let how = if via_value { "value" } else { "text content" };
            return Err(DeliveryError::NotWritable(format!(
                "{} has no {how}",
                self.description
            )));
        }
        self.text = text.to_string();
        Ok(())
    }
}

impl EditableTarget for SnapshotTarget {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    fn focus(&mut self) -> Result<(), DeliveryError> {
        if self.detached {
            return Err(DeliveryError::FocusRejected(self.description.clone()));
        }
        self.focused = true;
        Ok(())
    }

    fn set_text_content(&mut self, text: &str) -> Result<(), DeliveryError> {
        self.assign(text, false)
    }

    fn set_value(&mut self, text: &str) -> Result<(), DeliveryError> {
        self.assign(text, true)
    }

    fn dispatch(&mut self, event: SyntheticEvent) -> Result<(), DeliveryError> {
        if self.detached {
            return Err(DeliveryError::EventRejected(event.type_name().to_string()));
        }
        // A focused editor applies an uncancelled paste itself.
        if let SyntheticEvent::Paste { data } = &event {
            if self.focused && !self.read_only && self.text.is_empty() {
                self.text.clone_from(data);
            }
        }
        self.events.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_vs_text_content() {
        let mut area = SnapshotTarget::new(TargetKind::TextArea, "textarea");
        assert!(area.set_text_content("x").is_err());
        area.set_value("hello").unwrap();
        assert_eq!(area.text(), "hello");

        let mut editable = SnapshotTarget::new(TargetKind::ContentEditable, "div");
        assert!(editable.set_value("x").is_err());
        editable.set_text_content("hi").unwrap();
        assert_eq!(editable.text(), "hi");
    }

    #[test]
    fn test_detached_rejects_focus_and_events() {
        let mut target = SnapshotTarget::new(TargetKind::TextBox, "div").detached();
        assert!(target.focus().is_err());
        assert!(target.dispatch(SyntheticEvent::Change).is_err());
        assert!(target.events().is_empty());
    }

    #[test]
    fn test_event_names() {
        let mut target = SnapshotTarget::new(TargetKind::TextArea, "textarea");
        target.dispatch(SyntheticEvent::insert_text("a")).unwrap();
        target.dispatch(SyntheticEvent::input()).unwrap();
        target.dispatch(SyntheticEvent::Change).unwrap();
        assert_eq!(target.event_names(), vec!["input", "input", "change"]);
    }

    #[test]
    fn test_modifier_for_os() {
        let modifier = PasteModifier::for_current_os();
        if cfg!(target_os = "macos") {
            assert_eq!(modifier, PasteModifier::Meta);
        } else {
            assert_eq!(modifier, PasteModifier::Ctrl);
        }
    }
}
