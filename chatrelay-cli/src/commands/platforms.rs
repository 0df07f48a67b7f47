//! Platforms command - list supported platforms.

use anyhow::Result;
use chatrelay_adapters::AdapterRegistry;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the platforms command.
pub fn run(cli: &Cli) -> Result<()> {
    info!("Listing platforms");

    let adapters = AdapterRegistry::all();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            println!("{}", formatter.format_platforms_header());
            println!("{}", "─".repeat(70));

            for desc in adapters {
                println!("{}", formatter.format_platform_line(desc));
            }

            println!();
            println!(
                "Total: {} platforms ({} with site-specific selectors)",
                adapters.len(),
                AdapterRegistry::site_specific().len()
            );
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_platforms(adapters)?);
        }
    }

    Ok(())
}
