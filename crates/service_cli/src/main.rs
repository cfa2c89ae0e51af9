//! randstat CLI - Timed Generation and Sample Statistics
//!
//! This is the operational entry point for the randstat library.
//!
//! # Commands
//!
//! - `randstat run` - Generate batches of increasing volume, time each batch
//!   and print one statistics report per batch
//! - `randstat check` - Print the effective, validated configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate owns everything the core library
//! leaves to its caller: variant selection, timing, configuration, logging
//! and output.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod prompt;
mod render;

pub use error::{CliError, Result};

use config::{LogLevel, RunArgs};

/// randstat: seeded integer generators and sample statistics
#[derive(Parser)]
#[command(name = "randstat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "randstat.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate timed batches and report their statistics
    Run(RunArgs),

    /// Check the effective configuration
    Check,
}

fn init_tracing(level: LogLevel, verbose: bool) {
    let level = if verbose {
        LogLevel::Debug
    } else {
        level
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let run_args = match &cli.command {
        Commands::Run(args) => Some(args),
        Commands::Check => None,
    };
    let (config, config_found) = config::build_config(&cli.config, run_args)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    init_tracing(config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if !config_found {
        warn!(
            "Config file {} not found, using defaults",
            cli.config.display()
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Run(_) => {
            let variant = match config.variant {
                Some(variant) => variant,
                None => prompt::prompt_variant(&mut io::stdin().lock(), &mut io::stderr())?,
            };
            commands::run::run(&config, variant, &mut out)?;
        }
        Commands::Check => commands::check::run(&config, config_found, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
