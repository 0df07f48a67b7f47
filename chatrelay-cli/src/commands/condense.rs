//! Condense command - build a budget-bounded continuation prompt.

use std::path::PathBuf;

use anyhow::Result;
use chatrelay_core::condense;
use chatrelay_store::SettingsStore;
use clap::Args;
use tracing::info;

use super::{read_conversation, write_output};
use crate::{Cli, OutputFormat};

/// Arguments for the condense command.
#[derive(Args, Debug)]
pub struct CondenseArgs {
    /// Export file (`-` or omitted for stdin).
    pub file: Option<PathBuf>,

    /// Maximum prompt length in characters.
    #[arg(long, short)]
    pub budget: Option<usize>,

    /// Write the prompt to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Runs the condense command.
pub async fn run(args: &CondenseArgs, cli: &Cli) -> Result<()> {
    let conversation = read_conversation(args.file.as_deref()).await?;
    let budget = match args.budget {
        Some(budget) => budget,
        None => SettingsStore::load_default().await?.condense_budget().await,
    };

    let prompt = condense(&conversation, budget);
    info!(
        messages = conversation.len(),
        budget,
        chars = prompt.chars().count(),
        "Condensed conversation"
    );

    match cli.format {
        OutputFormat::Text => write_output(args.output.as_deref(), &prompt).await,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "budget": budget,
                "chars": prompt.chars().count(),
                "prompt": prompt,
            });
            let formatter = crate::output::JsonFormatter::new(cli.pretty);
            write_output(args.output.as_deref(), &formatter.format(&output)?).await
        }
    }
}
