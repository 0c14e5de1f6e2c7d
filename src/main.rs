//! Relabel - idempotent rule-driven rewriting of static HTML pages.

mod batch;
mod cli;
mod config;
mod dict;
mod logger;
mod rule;
mod transform;
mod translate;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::RelabelConfig;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = match RelabelConfig::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            // Diagnostics render their own colored block
            if let Some(config::ConfigError::Diagnostics(diag)) = err.downcast_ref::<config::ConfigError>() {
                eprintln!("{diag}");
                return Ok(ExitCode::FAILURE);
            }
            return Err(err);
        }
    };
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    match &cli.command {
        Commands::Check => cli::check::check(&cli, &config).map(|()| ExitCode::SUCCESS),
        _ => {
            let failed = cli::run::run_passes(&cli, &config)?;
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
    }
}
