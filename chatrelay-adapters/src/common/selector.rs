//! Container-selector strategy.
//!
//! Most platform strategies share one shape: select every turn container,
//! read its text (optionally from a preferred descendant), resolve the
//! role, collect attachments. [`SelectorStrategy`] is that shape with the
//! per-site knobs exposed.

use chatrelay_core::{Conversation, Message};
use chatrelay_dom::host::document::{css, css_all, select_first_within, text_of};
use chatrelay_dom::{ExtractContext, ExtractError, ExtractStrategy, StrategyKind};
use scraper::{ElementRef, Selector};
use tracing::{debug, instrument};

use super::attachments::{AttachmentScope, collect_attachments};
use super::roles::RoleResolver;

/// Extracts one message per element matching a container selector.
#[derive(Debug, Clone)]
pub struct SelectorStrategy {
    id: &'static str,
    kind: StrategyKind,
    containers: &'static str,
    content: &'static [&'static str],
    roles: RoleResolver,
    attachments: AttachmentScope,
    min_chars: usize,
}

impl SelectorStrategy {
    /// Creates a strategy over `containers`.
    pub fn new(id: &'static str, kind: StrategyKind, containers: &'static str) -> Self {
        Self {
            id,
            kind,
            containers,
            content: &[],
            roles: RoleResolver::new(),
            attachments: AttachmentScope::Container,
            min_chars: 1,
        }
    }

    /// Descendants preferred as the text source, first match wins.
    ///
    /// Falls back to the container itself.
    #[must_use]
    pub fn content(mut self, selectors: &'static [&'static str]) -> Self {
        self.content = selectors;
        self
    }

    /// Sets the role resolver.
    #[must_use]
    pub fn roles(mut self, roles: RoleResolver) -> Self {
        self.roles = roles;
        self
    }

    /// Sets where attachments are collected from.
    #[must_use]
    pub fn attachments(mut self, scope: AttachmentScope) -> Self {
        self.attachments = scope;
        self
    }

    /// Turns with fewer characters and no attachments are skipped.
    #[must_use]
    pub fn min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars.max(1);
        self
    }

    /// The container selector.
    pub fn containers(&self) -> &'static str {
        self.containers
    }

    fn turn_text(container: ElementRef<'_>, content: &[Selector]) -> String {
        content
            .iter()
            .find_map(|selector| select_first_within(container, selector))
            .map_or_else(|| text_of(container), text_of)
    }
}

impl ExtractStrategy for SelectorStrategy {
    fn id(&self) -> &str {
        self.id
    }

    fn kind(&self) -> StrategyKind {
        self.kind
    }

    #[instrument(skip(self, ctx), fields(strategy = self.id))]
    fn extract(&self, ctx: &ExtractContext<'_>) -> Result<Conversation, ExtractError> {
        let containers = ctx.document.select_all(&css(self.containers)?);
        let content = css_all(self.content)?;
        debug!(containers = containers.len(), "Matched turn containers");

        let mut conversation = Conversation::new();
        for container in containers {
            let text = Self::turn_text(container, &content);
            let attachments = collect_attachments(self.attachments.resolve(container)?)?;
            if text.trim().chars().count() < self.min_chars && attachments.is_empty() {
                continue;
            }
            let role = self.roles.resolve(container)?;
            if let Some(message) = Message::from_turn(role, &text, attachments) {
                conversation.push(message);
            }
        }
        Ok(conversation)
    }
}
