//! CLI command implementations.

pub mod condense;
pub mod config;
pub mod export;
pub mod handle;
pub mod import;
pub mod platforms;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chatrelay_adapters::{AdapterDescriptor, AdapterRegistry};
use chatrelay_core::{Conversation, parse_import};
use chatrelay_dom::PageDocument;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Page arguments shared by commands that work on a saved chat page.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Saved HTML of the chat page.
    #[arg(long)]
    pub page: PathBuf,

    /// URL the page was saved from.
    #[arg(long)]
    pub url: String,

    /// Platform id; overrides URL detection.
    #[arg(long)]
    pub platform: Option<String>,
}

impl PageArgs {
    /// Resolves the adapter for these arguments.
    pub fn adapter(&self) -> Result<&'static AdapterDescriptor> {
        Ok(AdapterRegistry::resolve(
            self.platform.as_deref(),
            Some(self.url.as_str()),
        )?)
    }

    /// Reads and parses the page.
    pub async fn load(&self) -> Result<PageDocument> {
        let html = tokio::fs::read_to_string(&self.page)
            .await
            .with_context(|| format!("Failed to read page {}", self.page.display()))?;
        debug!(page = %self.page.display(), bytes = html.len(), "Loaded page");
        Ok(PageDocument::parse(&html).with_url(self.url.clone()))
    }
}

/// Returns true when the argument means stdin.
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Reads a file, or stdin for `-` and no argument.
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdin(Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Reads an export document and normalizes its messages.
pub async fn read_conversation(path: Option<&Path>) -> Result<Conversation> {
    let json = read_input(path).await?;
    let conversation = parse_import(&json)?;
    debug!(messages = conversation.len(), "Loaded conversation");
    Ok(conversation)
}

/// Writes text to a file, or stdout when no path is given.
pub async fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdin(Some(path)) => {
            tokio::fs::write(path, text)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), chars = text.chars().count(), "Wrote output");
        }
        _ => println!("{text}"),
    }
    Ok(())
}
