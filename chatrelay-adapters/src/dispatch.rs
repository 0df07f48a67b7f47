//! Request handling against a page.
//!
//! [`handle_request`] is the single entry point a surface calls with an
//! inbound [`Request`]: `exportChat` runs the adapter's extraction chain,
//! `importChat` locates the composer and delivers either the supplied
//! condensed prompt or the full continuation prompt.

use chatrelay_core::{Request, Response, UiSink, render_continuation_prompt};
use chatrelay_dom::{
    DeliveryContext, DeliveryReport, ExtractError, ExtractSettings, PageDocument, SnapshotTarget,
};
use tracing::{info, instrument, warn};

use crate::adapter::PlatformAdapter;
use crate::error::AdapterError;

// ============================================================================
// Dispatch Context
// ============================================================================

/// Everything a request needs besides the page and the adapter.
pub struct DispatchContext<'a> {
    /// Extraction settings for `exportChat`.
    pub extract: ExtractSettings,
    /// Delivery context for `importChat`.
    pub delivery: &'a DeliveryContext,
    /// Receives the import notice.
    pub sink: &'a dyn UiSink,
}

impl<'a> DispatchContext<'a> {
    /// Creates a context with default extraction settings.
    pub fn new(delivery: &'a DeliveryContext, sink: &'a dyn UiSink) -> Self {
        Self {
            extract: ExtractSettings::default(),
            delivery,
            sink,
        }
    }

    /// Replaces the extraction settings.
    #[must_use]
    pub fn with_extract(mut self, extract: ExtractSettings) -> Self {
        self.extract = extract;
        self
    }
}

impl std::fmt::Debug for DispatchContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchContext")
            .field("extract", &self.extract)
            .field("delivery", &self.delivery)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Handled Request
// ============================================================================

/// Result of handling one request.
#[derive(Debug)]
pub struct Handled {
    /// Response sent back to the caller.
    pub response: Response,
    /// Delivery steps, for `importChat` requests that reached delivery.
    pub delivery: Option<DeliveryReport>,
    /// The composer after delivery.
    pub target: Option<SnapshotTarget>,
}

impl Handled {
    fn response(response: Response) -> Self {
        Self {
            response,
            delivery: None,
            target: None,
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Returns the text an import request delivers.
///
/// A non-empty condensed prompt is used verbatim; otherwise the normalized
/// messages are rendered as a continuation prompt.
pub fn import_text(request: &Request) -> String {
    request.condensed_prompt().map_or_else(
        || render_continuation_prompt(&request.import_conversation()),
        str::to_string,
    )
}

/// Handles a request against a page.
#[instrument(skip_all, fields(action = request.action(), platform = %adapter.platform()))]
pub async fn handle_request(
    request: &Request,
    document: &PageDocument,
    adapter: &dyn PlatformAdapter,
    ctx: &DispatchContext<'_>,
) -> Handled {
    match request {
        Request::ExportChat => match adapter.extract_messages(document, &ctx.extract) {
            Ok(messages) => {
                info!(messages = messages.len(), "Exported conversation");
                Handled::response(Response::Messages { messages })
            }
            Err(error) => {
                warn!(error = %error, "Export failed");
                Handled::response(Response::error(error))
            }
        },
        Request::ImportChat { .. } => import(request, document, adapter, ctx).await,
    }
}

/// Parses a JSON request and handles it.
///
/// Malformed JSON yields an error response rather than a failure.
pub async fn handle_json(
    json: &str,
    document: &PageDocument,
    adapter: &dyn PlatformAdapter,
    ctx: &DispatchContext<'_>,
) -> Handled {
    match serde_json::from_str::<Request>(json) {
        Ok(request) => handle_request(&request, document, adapter, ctx).await,
        Err(error) => {
            let error = AdapterError::InvalidRequest(error);
            warn!(error = %error, "Rejected request");
            Handled::response(Response::error(error))
        }
    }
}

async fn import(
    request: &Request,
    document: &PageDocument,
    adapter: &dyn PlatformAdapter,
    ctx: &DispatchContext<'_>,
) -> Handled {
    let located = match adapter.locate_input(document) {
        Ok(Some(located)) => located,
        Ok(None) => return Handled::response(Response::error(ExtractError::InputNotFound)),
        Err(error) => return Handled::response(Response::error(error)),
    };
    info!(input = %located.description(), "Delivering into composer");

    let conversation = request.import_conversation();
    let text = import_text(request);
    let mut target = located.into_target();
    let report = adapter.deliver_text(&text, &mut target, ctx.delivery).await;

    let count = if conversation.is_empty() && request.condensed_prompt().is_some() {
        1
    } else {
        conversation.len()
    };
    ctx.sink.import_succeeded(count, ctx.delivery.settings.clipboard);
    if !report.any_succeeded() {
        ctx.sink.warn("No delivery step succeeded");
    }

    Handled {
        response: Response::success(),
        delivery: Some(report),
        target: Some(target),
    }
}
