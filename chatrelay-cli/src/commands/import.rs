//! Import command - deliver an exported conversation into a page's composer.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chatrelay_adapters::{DispatchContext, PlatformAdapter, handle_request};
use chatrelay_core::{Conversation, Request, Response, condense};
use chatrelay_dom::{DeliveryContext, ExtractError, SystemClipboard};
use chatrelay_store::SettingsStore;
use clap::Args;
use tracing::{debug, info};

use super::{PageArgs, read_conversation};
use crate::output::{JsonFormatter, TextFormatter};
use crate::sink::TerminalSink;
use crate::{Cli, OutputFormat};

/// Arguments for the import command.
#[derive(Args, Debug)]
pub struct ImportArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Export file to import (`-` for stdin).
    pub file: PathBuf,

    /// Deliver a condensed prompt instead of the full transcript.
    #[arg(long)]
    pub condensed: bool,

    /// Character budget for the condensed prompt.
    #[arg(long)]
    pub budget: Option<usize>,

    /// Skip the system clipboard.
    #[arg(long)]
    pub no_clipboard: bool,
}

/// Builds the import request.
///
/// The condensed prompt is only attached when requested; otherwise the
/// receiving side renders the full transcript.
pub fn build_request(conversation: &Conversation, condensed: bool, budget: usize) -> Request {
    let prompt = condensed.then(|| condense(conversation, budget));
    Request::import(conversation, prompt)
}

/// Runs the import command.
pub async fn run(args: &ImportArgs, cli: &Cli) -> Result<()> {
    let adapter = args.page.adapter()?;
    let conversation = read_conversation(Some(&args.file)).await?;
    let document = args.page.load().await?;

    let store = SettingsStore::load_default().await?;
    let settings = store.get().await;
    let condensed = args.condensed || settings.use_condensed;
    let budget = args.budget.unwrap_or(settings.condense_budget);

    let mut delivery_settings = settings.to_delivery_settings();
    if args.no_clipboard {
        delivery_settings.clipboard = false;
    }

    // Fail before touching the clipboard when the page has no composer.
    if adapter.locate_input(&document)?.is_none() {
        return Err(ExtractError::InputNotFound.into());
    }

    let request = build_request(&conversation, condensed, budget);
    debug!(messages = conversation.len(), condensed, budget, "Built import request");

    let delivery = DeliveryContext::builder()
        .clipboard(Arc::new(SystemClipboard::new()))
        .settings(delivery_settings)
        .build();
    let sink = TerminalSink::new(cli.quiet, !cli.no_color);
    let ctx = DispatchContext::new(&delivery, &sink).with_extract(settings.to_extract_settings());

    let handled = handle_request(&request, &document, adapter, &ctx).await;
    if let Response::Error { error } = handled.response {
        anyhow::bail!(error);
    }
    let (Some(report), Some(target)) = (handled.delivery, handled.target) else {
        anyhow::bail!("Delivery did not run");
    };
    info!(
        platform = %adapter.platform(),
        chars = report.text_chars,
        clipboard = report.clipboard_used(),
        "Import delivered"
    );

    if cli.quiet {
        return Ok(());
    }
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_delivery_report(target.description(), &report));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = formatter.format_import(
                adapter.platform().id(),
                target.description().to_string(),
                conversation.len(),
                condensed,
                &report,
            )?;
            println!("{output}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrelay_core::{Message, Role, render_continuation_prompt};

    fn conversation() -> Conversation {
        vec![
            Message::text(Role::User, "Explain borrowing"),
            Message::text(Role::Assistant, "References let you use a value without owning it."),
        ]
        .into()
    }

    #[test]
    fn test_full_transcript_request() {
        let conv = conversation();
        let request = build_request(&conv, false, 4000);
        assert_eq!(request.condensed_prompt(), None);
        assert_eq!(request.import_conversation(), conv);
        assert_eq!(
            chatrelay_adapters::import_text(&request),
            render_continuation_prompt(&conv)
        );
    }

    #[test]
    fn test_condensed_request() {
        let conv = conversation();
        let request = build_request(&conv, true, 4000);
        let prompt = request.condensed_prompt().unwrap();
        assert_eq!(prompt, condense(&conv, 4000));
        assert_eq!(chatrelay_adapters::import_text(&request), prompt);
    }
}
