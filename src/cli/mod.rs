//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for setup-vars using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// setup-vars - resolve CI setup descriptors into exported variables
#[derive(Parser, Debug)]
#[command(name = "setup-vars")]
#[command(version, about, long_about = None)]
#[command(author = "setup-vars Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./setup-vars.toml when present)
    #[arg(short, long, env = "SETUP_VARS_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SETUP_VARS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a setup descriptor and export it to the host platform
    Resolve(commands::resolve::ResolveArgs),

    /// Check a setup descriptor and list unresolved references
    ValidateSetup(commands::validate::ValidateSetupArgs),

    /// Print a random run identifier
    GenerateId(commands::generate_id::GenerateIdArgs),
}
