//! Prose probe.
//!
//! Runs after every other strategy. If the main region holds visible text
//! the page clearly has a conversation the selectors no longer understand,
//! which is reported as [`ExtractError::UnrecognizedLayout`] rather than
//! "no messages".

use chatrelay_core::Conversation;
use chatrelay_dom::host::document::text_of;
use chatrelay_dom::{ExtractContext, ExtractError, ExtractStrategy, StrategyKind};
use tracing::debug;

/// Fails with `UnrecognizedLayout` when the main region has text.
#[derive(Debug, Clone)]
pub struct ProseProbeStrategy {
    id: &'static str,
}

impl ProseProbeStrategy {
    /// Creates a probe.
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }
}

impl ExtractStrategy for ProseProbeStrategy {
    fn id(&self) -> &str {
        self.id
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Probe
    }

    fn extract(&self, ctx: &ExtractContext<'_>) -> Result<Conversation, ExtractError> {
        let has_prose = ctx
            .document
            .main_region(&[])?
            .is_some_and(|region| !text_of(region).is_empty());

        if has_prose {
            debug!(strategy = self.id, "Main region has unsegmented prose");
            return Err(ExtractError::unrecognized(ctx.platform.display_name()));
        }
        Ok(Conversation::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrelay_core::PlatformKind;
    use chatrelay_dom::PageDocument;

    #[test]
    fn test_prose_is_unrecognized() {
        let doc = PageDocument::parse("<main><span>Some reply text</span></main>");
        let ctx = ExtractContext::new(&doc, PlatformKind::Claude);
        let err = ProseProbeStrategy::new("claude.probe").extract(&ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not automatically detect message structure. Claude may have updated their interface."
        );
    }

    #[test]
    fn test_empty_main_is_empty() {
        let doc = PageDocument::parse("<main>   </main>");
        let ctx = ExtractContext::new(&doc, PlatformKind::Claude);
        assert!(ProseProbeStrategy::new("claude.probe").extract(&ctx).unwrap().is_empty());

        let doc = PageDocument::parse("<body><p>outside main</p></body>");
        let ctx = ExtractContext::new(&doc, PlatformKind::Claude);
        assert!(ProseProbeStrategy::new("claude.probe").extract(&ctx).unwrap().is_empty());
    }
}
