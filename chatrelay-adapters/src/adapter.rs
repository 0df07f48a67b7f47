//! The platform adapter contract.
//!
//! Every supported site satisfies the same three capabilities. Adapters are
//! stateless: each call re-reads the page it is given.

use async_trait::async_trait;
use chatrelay_core::{Conversation, PlatformKind};
use chatrelay_dom::{
    DeliveryContext, DeliveryPipeline, DeliveryReport, EditableTarget, ExtractContext,
    ExtractError, ExtractOutcome, ExtractSettings, LocatedInput, PageDocument,
};
use tracing::{debug, instrument};

use crate::descriptor::AdapterDescriptor;

/// Capabilities of a chat platform adapter.
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// The platform this adapter serves.
    fn platform(&self) -> PlatformKind;

    /// Runs the extraction chain and reports every attempt.
    fn extract_outcome(&self, document: &PageDocument, settings: &ExtractSettings) -> ExtractOutcome;

    /// Extracts the conversation in document order.
    fn extract_messages(
        &self,
        document: &PageDocument,
        settings: &ExtractSettings,
    ) -> Result<Conversation, ExtractError> {
        self.extract_outcome(document, settings)
            .into_result()
            .map(|result| result.conversation)
    }

    /// Finds the composer input, if the page has one.
    fn locate_input(&self, document: &PageDocument) -> Result<Option<LocatedInput>, ExtractError>;

    /// Delivers text into a located target. Never fails.
    async fn deliver_text(
        &self,
        text: &str,
        target: &mut dyn EditableTarget,
        ctx: &DeliveryContext,
    ) -> DeliveryReport {
        DeliveryPipeline::standard().deliver(text, target, ctx).await
    }
}

#[async_trait]
impl PlatformAdapter for AdapterDescriptor {
    fn platform(&self) -> PlatformKind {
        self.id
    }

    #[instrument(skip(self, document, settings), fields(platform = %self.id))]
    fn extract_outcome(&self, document: &PageDocument, settings: &ExtractSettings) -> ExtractOutcome {
        let ctx = ExtractContext::new(document, self.id).with_settings(settings.clone());
        let outcome = self.build_pipeline(settings).execute(&ctx);
        debug!(
            attempts = outcome.attempts_count(),
            strategy = ?outcome.successful_strategy(),
            "Extraction finished"
        );
        outcome
    }

    fn locate_input(&self, document: &PageDocument) -> Result<Option<LocatedInput>, ExtractError> {
        self.input_locator().locate(document)
    }
}
