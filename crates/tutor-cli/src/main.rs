//! Tutor CLI - console exercises entry point

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use tutor_cli::{cli::Cli, commands::CommandDispatcher, config::AppConfig};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration before logging so the config file can turn on verbosity
    let config = load_configuration(&cli).context("Failed to load configuration")?;

    // Initialize logging
    setup_logging(config.cli.verbose);
    debug!(?config, "Loaded configuration");

    // Execute the command
    if let Err(e) = CommandDispatcher::execute(cli.command, &config) {
        error!("Command execution failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Setup logging based on verbosity level
///
/// Logs go to stderr; stdout carries only the exercise transcript.
fn setup_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Load configuration from file or defaults, with `--verbose` layered on top
fn load_configuration(cli: &Cli) -> anyhow::Result<AppConfig> {
    let path = cli.config.as_deref().map(Path::new);
    let config = AppConfig::load_with_overrides(path, cli.verbose.then_some(true))
        .with_context(|| match &cli.config {
            Some(path) => format!("Could not read configuration from {}", path),
            None => "Could not read default configuration".to_string(),
        })?;
    Ok(config)
}
