//! Handle command - answer one request envelope.
//!
//! Reads a request such as `{"action":"exportChat"}` on stdin, runs it
//! against the page and writes the response JSON on stdout. Failures inside
//! the request are reported in the response, not through the exit code.

use std::sync::Arc;

use anyhow::Result;
use chatrelay_adapters::{DispatchContext, handle_json};
use chatrelay_dom::{DeliveryContext, SystemClipboard};
use chatrelay_store::SettingsStore;
use clap::Args;
use tracing::debug;

use super::{PageArgs, read_input};
use crate::output::JsonFormatter;
use crate::sink::TerminalSink;
use crate::Cli;

/// Arguments for the handle command.
#[derive(Args, Debug)]
pub struct HandleArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

/// Runs the handle command.
pub async fn run(args: &HandleArgs, cli: &Cli) -> Result<()> {
    let adapter = args.page.adapter()?;
    let document = args.page.load().await?;
    let request = read_input(None).await?;

    let settings = SettingsStore::load_default().await?.get().await;
    let delivery = DeliveryContext::builder()
        .clipboard(Arc::new(SystemClipboard::new()))
        .settings(settings.to_delivery_settings())
        .build();
    let sink = TerminalSink::new(cli.quiet, !cli.no_color);
    let ctx = DispatchContext::new(&delivery, &sink).with_extract(settings.to_extract_settings());

    let handled = handle_json(request.trim(), &document, adapter, &ctx).await;
    if let Some(report) = &handled.delivery {
        for step in &report.steps {
            debug!(step = %step.step, status = ?step.status, error = ?step.error, "Delivery step");
        }
    }

    let formatter = JsonFormatter::new(cli.pretty);
    println!("{}", formatter.format(&handled.response)?);
    Ok(())
}
