//! Config command - manage configuration.

use anyhow::Result;
use chatrelay_store::{SETTING_KEYS, Settings, SettingsStore, default_config_dir, default_settings_path};
use clap::{Args, Subcommand};
use tracing::info;

use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Set a value, e.g. `delivery.clipboard false`.
    Set {
        /// Dotted settings key.
        key: String,
        /// New value.
        value: String,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli).await,
        ConfigAction::Path => show_paths(cli),
        ConfigAction::Set { key, value } => set_value(key, value, cli).await,
        ConfigAction::Reset => reset_config(cli).await,
    }
}

async fn show_config(cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    let settings = store.get().await;

    match cli.format {
        OutputFormat::Text => {
            println!("ChatRelay Configuration");
            println!("{}", "─".repeat(40));
            println!();
            for line in settings_lines(&settings) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&settings)?);
        }
    }

    Ok(())
}

fn settings_lines(settings: &Settings) -> Vec<String> {
    let export_dir = settings
        .export_dir
        .as_ref()
        .map_or_else(|| "(current directory)".to_string(), |p| p.display().to_string());
    vec![
        format!("Condense budget:      {}", settings.condense_budget),
        format!("Use condensed:        {}", settings.use_condensed),
        format!("Generic fallback:     {}", settings.extraction.generic_fallback),
        format!("Clipboard:            {}", settings.delivery.clipboard),
        format!("Synthetic paste:      {}", settings.delivery.synthetic_paste),
        format!("Paste shortcut:       {}", settings.delivery.paste_shortcut),
        format!("Export dir:           {export_dir}"),
        format!("Log level:            {}", settings.log_level),
    ]
}

fn show_paths(cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let settings_path = default_settings_path();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:    {}", config_dir.display());
            println!("Settings file: {}", settings_path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "settings_file": settings_path.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

async fn set_value(key: &str, value: &str, cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    if let Err(e) = store.set(key, value).await {
        if e.is_user_error() {
            anyhow::bail!("{e}. Keys: {}", SETTING_KEYS.join(", "));
        }
        return Err(e.into());
    }
    store.save().await?;

    info!(key, value, "Setting updated");
    if !cli.quiet {
        println!("Set {key} = {value}");
    }

    Ok(())
}

async fn reset_config(cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    let removed = store.reset().await?;

    if !cli.quiet {
        if removed {
            println!("Configuration reset to defaults");
        } else {
            println!("No configuration file to reset");
        }
    }

    Ok(())
}
