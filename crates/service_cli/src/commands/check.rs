//! Check command implementation
//!
//! Prints the effective configuration after file, environment and defaults
//! have been merged and validated.

use std::io::Write;

use tracing::info;

use crate::config::RunConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run<W: Write>(config: &RunConfig, config_found: bool, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::invalid_argument(format!("Cannot render configuration: {}", e)))?;

    if !config_found {
        writeln!(out, "# no config file found, showing defaults")?;
    }
    write!(out, "{}", rendered)?;

    match config.variant {
        Some(variant) => info!("  Generator: {}", variant.label()),
        None => info!("  Generator: prompted at run time"),
    }
    info!("Configuration OK");
    Ok(())
}
