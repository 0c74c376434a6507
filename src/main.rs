// setup-vars - CI setup variable and secret resolution
// Copyright (c) 2025 setup-vars Contributors
// Licensed under the MIT License

use clap::Parser;
use setup_vars::cli::{Cli, Commands};
use setup_vars::config::{load_config_or_default, SetupVarsConfig};
use setup_vars::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(config.application.log_level.as_str());
    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "setup-vars");

    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors, flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &SetupVarsConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Resolve(args) => args.execute(config),
        Commands::ValidateSetup(args) => args.execute(),
        Commands::GenerateId(args) => args.execute(),
    }
}
