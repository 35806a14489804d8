//! Contact form validator - command line entry point
//!
//! Reads one JSON document from stdin and writes the verdict as JSON to
//! stdout. Exit codes: 0 valid, 1 invalid, 2 bad input or configuration.

use anyhow::Context;
use contact_form_validator::{cli, Config};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::from_env();

    // Logging goes to stderr only; stdout carries the JSON verdict
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = config
        .context("Failed to load configuration")
        .and_then(|config| cli::run(&config, std::io::stdin().lock(), std::io::stdout().lock()));

    if let Err(e) = &result {
        error!("{:#}", e);
    }

    ExitCode::from(cli::exit_status(&result))
}
