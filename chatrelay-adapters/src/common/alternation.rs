//! Generic paragraph scan with role alternation.
//!
//! Last resort when no turn structure is recognized: every paragraph-like
//! block in the main region becomes a message, roles alternating from
//! `user`. A turn that spans several paragraphs shifts every later role,
//! so the result is only as good as the page's one-block-per-turn layout.

use chatrelay_core::{Conversation, Message, Role};
use chatrelay_dom::host::document::{css, select_within, text_of};
use chatrelay_dom::{ExtractContext, ExtractError, ExtractStrategy, StrategyKind};
use tracing::{debug, instrument};

use super::attachments::{AttachmentScope, collect_attachments};

/// Alternating-role scan of paragraph-like blocks.
#[derive(Debug, Clone)]
pub struct AlternationStrategy {
    id: &'static str,
    regions: &'static [&'static str],
    blocks: &'static str,
    longer_than: usize,
    attachments: AttachmentScope,
}

impl AlternationStrategy {
    /// Creates a scan of `blocks` inside `main` / `[role="main"]`.
    pub fn new(id: &'static str, blocks: &'static str) -> Self {
        Self {
            id,
            regions: &[],
            blocks,
            longer_than: 5,
            attachments: AttachmentScope::Container,
        }
    }

    /// Extra region selectors tried after `main` and `[role="main"]`.
    #[must_use]
    pub fn regions(mut self, regions: &'static [&'static str]) -> Self {
        self.regions = regions;
        self
    }

    /// Blocks with at most this many characters are ignored.
    #[must_use]
    pub fn longer_than(mut self, chars: usize) -> Self {
        self.longer_than = chars;
        self
    }

    /// Sets where attachments are collected from.
    #[must_use]
    pub fn attachments(mut self, scope: AttachmentScope) -> Self {
        self.attachments = scope;
        self
    }
}

impl ExtractStrategy for AlternationStrategy {
    fn id(&self) -> &str {
        self.id
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Generic
    }

    #[instrument(skip(self, ctx), fields(strategy = self.id))]
    fn extract(&self, ctx: &ExtractContext<'_>) -> Result<Conversation, ExtractError> {
        let Some(region) = ctx.document.main_region(self.regions)? else {
            debug!("No main region");
            return Ok(Conversation::new());
        };

        let mut conversation = Conversation::new();
        let mut role = Role::User;
        for block in select_within(region, &css(self.blocks)?) {
            let text = text_of(block);
            if text.chars().count() <= self.longer_than {
                continue;
            }
            let attachments = collect_attachments(self.attachments.resolve(block)?)?;
            if let Some(message) = Message::from_turn(role, &text, attachments) {
                conversation.push(message);
                role = role.flipped();
            }
        }
        debug!(messages = conversation.len(), "Alternation scan finished");
        Ok(conversation)
    }
}
