//! Render command - print the full continuation prompt.

use std::path::PathBuf;

use anyhow::Result;
use chatrelay_core::render_continuation_prompt;
use clap::Args;

use super::{read_conversation, write_output};
use crate::Cli;

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Export file (`-` or omitted for stdin).
    pub file: Option<PathBuf>,

    /// Write the prompt to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Runs the render command.
pub async fn run(args: &RenderArgs, _cli: &Cli) -> Result<()> {
    let conversation = read_conversation(args.file.as_deref()).await?;
    write_output(args.output.as_deref(), &render_continuation_prompt(&conversation)).await
}
