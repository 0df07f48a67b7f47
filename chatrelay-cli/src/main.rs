// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! ChatRelay CLI - move AI chat transcripts between chat products.
//!
//! # Examples
//!
//! ```bash
//! # Export the conversation of a saved page
//! chatrelay export --page claude.html --url https://claude.ai/chat/1
//!
//! # Deliver it into another product's composer
//! chatrelay import --page gemini.html --url https://gemini.google.com/app chat-export-claude-1.json
//!
//! # Budget-bounded prompt for long conversations
//! chatrelay condense chat-export-claude-1.json --budget 2000
//!
//! # Answer one request envelope
//! echo '{"action":"exportChat"}' | chatrelay handle --page claude.html --url https://claude.ai/
//!
//! # List platforms
//! chatrelay platforms --format json --pretty
//! ```

mod commands;
mod output;
mod sink;

use anyhow::Result;
use chatrelay_adapters::AdapterError;
use chatrelay_core::CoreError;
use chatrelay_dom::ExtractError;
use chatrelay_store::{LogLevel, Settings, default_settings_path, load_json_or_default};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{condense, config, export, handle, import, platforms, render};

// ============================================================================
// CLI Definition
// ============================================================================

/// ChatRelay CLI - carry a conversation from one AI chat to another.
#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(about = "Move AI chat transcripts between chat products")]
#[command(long_about = r#"
ChatRelay reads a conversation out of one AI chat page and writes it into
another product's composer, either as the full transcript or as a condensed
prompt that fits a character budget.

Supported platforms:
  • Claude (claude)
  • ChatGPT (chatgpt)
  • Gemini (gemini)
  • Grok (grok)
  • Poe (poe)
  • Perplexity (perplexity)
  • Copilot (copilot)
  • Meta AI (meta)
  • You.com (you)

Examples:
  chatrelay export --page page.html --url https://claude.ai/chat/1
  chatrelay import --page page.html --url https://chatgpt.com/ export.json
  chatrelay condense export.json --budget 2000
  chatrelay render export.json
"#)]
#[command(version)]
#[command(author = "ChatRelay Contributors")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract the conversation from a saved chat page.
    #[command(visible_alias = "e")]
    Export(export::ExportArgs),

    /// Deliver an exported conversation into a page's composer.
    #[command(visible_alias = "i")]
    Import(import::ImportArgs),

    /// Build a budget-bounded continuation prompt.
    #[command(visible_alias = "c")]
    Condense(condense::CondenseArgs),

    /// Print the full continuation prompt.
    #[command(visible_alias = "r")]
    Render(render::RenderArgs),

    /// Answer one request envelope read from stdin.
    Handle(handle::HandleArgs),

    /// List supported platforms.
    #[command(visible_alias = "p")]
    Platforms,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Platform unknown or page not supported.
    PlatformUnknown = 2,
    /// No messages found, or the import file is not an export.
    NoMessages = 3,
    /// The page has no composer.
    InputNotFound = 4,
}

impl ExitCode {
    /// Picks the exit code for an error.
    pub fn for_error(error: &anyhow::Error) -> Self {
        if let Some(error) = error.downcast_ref::<AdapterError>() {
            return match error {
                AdapterError::UnsupportedUrl(_) | AdapterError::UnknownPlatform(_) => {
                    Self::PlatformUnknown
                }
                AdapterError::Extract(error) => Self::for_extract(error),
                AdapterError::InvalidRequest(_) => Self::Error,
            };
        }
        if let Some(error) = error.downcast_ref::<ExtractError>() {
            return Self::for_extract(error);
        }
        if let Some(error) = error.downcast_ref::<CoreError>() {
            return match error {
                CoreError::InvalidImportPayload(_) | CoreError::Serialization(_) => {
                    Self::NoMessages
                }
                CoreError::UnknownPlatform(_) => Self::PlatformUnknown,
                CoreError::Other(_) => Self::Error,
            };
        }
        Self::Error
    }

    fn for_extract(error: &ExtractError) -> Self {
        match error {
            ExtractError::NoMessagesFound | ExtractError::UnrecognizedLayout { .. } => {
                Self::NoMessages
            }
            ExtractError::InputNotFound => Self::InputNotFound,
            _ => Self::Error,
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, level: LogLevel) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("chatrelay=debug,info")
    } else {
        EnvFilter::new(format!("chatrelay={level}"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings: Settings = load_json_or_default(&default_settings_path()).await;
    setup_logging(cli.verbose, cli.quiet, settings.log_level);

    let result = match &cli.command {
        Commands::Export(args) => export::run(args, &cli).await,
        Commands::Import(args) => import::run(args, &cli).await,
        Commands::Condense(args) => condense::run(args, &cli).await,
        Commands::Render(args) => render::run(args, &cli).await,
        Commands::Handle(args) => handle::run(args, &cli).await,
        Commands::Platforms => platforms::run(&cli),
        Commands::Config(args) => config::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}
