//! Contexts handed to extraction strategies and delivery techniques.

use std::sync::Arc;

use chatrelay_core::PlatformKind;

use crate::host::clipboard::{ClipboardApi, SystemClipboard};
use crate::host::document::PageDocument;
use crate::host::target::PasteModifier;

// ============================================================================
// Extract Settings
// ============================================================================

/// Settings for extraction.
#[derive(Debug, Clone)]
pub struct ExtractSettings {
    /// Whether generic alternation fallbacks may run.
    pub generic_fallback: bool,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            generic_fallback: true,
        }
    }
}

impl ExtractSettings {
    /// Settings that only trust structural selectors.
    pub fn strict() -> Self {
        Self {
            generic_fallback: false,
        }
    }
}

// ============================================================================
// Extract Context
// ============================================================================

/// Context provided to extraction strategies.
#[derive(Debug)]
pub struct ExtractContext<'a> {
    /// The page being read.
    pub document: &'a PageDocument,
    /// Platform the page belongs to.
    pub platform: PlatformKind,
    /// Extraction settings.
    pub settings: ExtractSettings,
}

impl<'a> ExtractContext<'a> {
    /// Creates a context with default settings.
    pub fn new(document: &'a PageDocument, platform: PlatformKind) -> Self {
        Self {
            document,
            platform,
            settings: ExtractSettings::default(),
        }
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: ExtractSettings) -> Self {
        self.settings = settings;
        self
    }
}

// ============================================================================
// Delivery Settings
// ============================================================================

/// Settings for delivery.
#[derive(Debug, Clone)]
pub struct DeliverySettings {
    /// Copy to the system clipboard.
    pub clipboard: bool,
    /// Dispatch a synthetic paste event.
    pub synthetic_paste: bool,
    /// Dispatch the paste keyboard shortcut.
    pub paste_shortcut: bool,
    /// Modifier held for the paste shortcut.
    pub paste_modifier: PasteModifier,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            clipboard: true,
            synthetic_paste: true,
            paste_shortcut: true,
            paste_modifier: PasteModifier::for_current_os(),
        }
    }
}

// ============================================================================
// Delivery Context
// ============================================================================

/// Context provided to delivery techniques.
pub struct DeliveryContext {
    /// Clipboard used by the clipboard step.
    pub clipboard: Arc<dyn ClipboardApi>,
    /// Delivery settings.
    pub settings: DeliverySettings,
}

impl DeliveryContext {
    /// Creates a context with the system clipboard and default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> DeliveryContextBuilder {
        DeliveryContextBuilder::new()
    }
}

impl Default for DeliveryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DeliveryContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryContext")
            .field("clipboard", &self.clipboard.name())
            .field("settings", &self.settings)
            .finish()
    }
}

// ============================================================================
// Delivery Context Builder
// ============================================================================

/// Builder for constructing a [`DeliveryContext`].
#[derive(Default)]
pub struct DeliveryContextBuilder {
    clipboard: Option<Arc<dyn ClipboardApi>>,
    settings: DeliverySettings,
}

impl DeliveryContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clipboard implementation.
    #[must_use]
    pub fn clipboard(mut self, clipboard: Arc<dyn ClipboardApi>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Sets the delivery settings.
    #[must_use]
    pub fn settings(mut self, settings: DeliverySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the paste modifier.
    #[must_use]
    pub fn paste_modifier(mut self, modifier: PasteModifier) -> Self {
        self.settings.paste_modifier = modifier;
        self
    }

    /// Builds the context.
    pub fn build(self) -> DeliveryContext {
        DeliveryContext {
            clipboard: self
                .clipboard
                .unwrap_or_else(|| Arc::new(SystemClipboard::new())),
            settings: self.settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::clipboard::MemoryClipboard;

    #[test]
    fn test_default_settings() {
        let settings = DeliverySettings::default();
        assert!(settings.clipboard);
        assert!(settings.synthetic_paste);
        assert!(settings.paste_shortcut);
        assert!(ExtractSettings::default().generic_fallback);
        assert!(!ExtractSettings::strict().generic_fallback);
    }

    #[test]
    fn test_builder() {
        let ctx = DeliveryContext::builder()
            .clipboard(Arc::new(MemoryClipboard::new()))
            .paste_modifier(PasteModifier::Meta)
            .build();
        assert_eq!(ctx.clipboard.name(), "memory");
        assert_eq!(ctx.settings.paste_modifier, PasteModifier::Meta);
    }
}
