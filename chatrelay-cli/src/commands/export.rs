//! Export command - extract a conversation from a saved page.

use std::path::PathBuf;

use anyhow::Result;
use chatrelay_adapters::PlatformAdapter;
use chatrelay_core::ExportDocument;
use chatrelay_store::{SettingsStore, write_export, write_export_to};
use clap::Args;
use tracing::info;

use super::PageArgs;
use crate::output::{ExportOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Output file. Defaults to `chat-export-<platform>-<millis>.json` in the export directory.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Only trust structural selectors (no generic fallbacks).
    #[arg(long)]
    pub strict: bool,
}

/// Runs the export command.
pub async fn run(args: &ExportArgs, cli: &Cli) -> Result<()> {
    let adapter = args.page.adapter()?;
    let document = args.page.load().await?;

    let store = SettingsStore::load_default().await?;
    let settings = store.get().await;
    let mut extract = settings.to_extract_settings();
    if args.strict {
        extract.generic_fallback = false;
    }

    let outcome = adapter.extract_outcome(&document, &extract);
    info!(
        platform = %adapter.platform(),
        attempts = outcome.attempts_count(),
        "Extraction finished"
    );
    let result = outcome.into_result()?;

    let export = ExportDocument::new(adapter.platform(), result.conversation, args.page.url.as_str());
    let path = match &args.output {
        Some(path) => {
            write_export_to(path, &export).await?;
            path.clone()
        }
        None => write_export(settings.export_dir(), &export).await?,
    };
    let path = path.display().to_string();

    if cli.quiet {
        return Ok(());
    }
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_export(&export, Some(&result.strategy_id), &path));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = ExportOutput::new(&export, Some(&result.strategy_id), Some(path));
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}
