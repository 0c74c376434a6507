// setup-vars - CI setup variable and secret resolution
// Copyright (c) 2025 setup-vars Contributors
// Licensed under the MIT License

//! # setup-vars - CI setup variable and secret resolution
//!
//! setup-vars turns a declarative setup descriptor into the environment of
//! an automated run. It merges automatic run variables (`PROJECT_ID`,
//! `RUN_ID`, `SERVICE_ACCOUNT`) with user-declared ones, interpolates
//! `$NAME` / `${ NAME }` references, forwards secret identifiers untouched,
//! and exports everything plus a masked `ID_TOKEN` to the host platform.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Resolution, substitution and export
//! - [`adapters`] - Host platforms (GitHub Actions, shell, in-memory)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Tool configuration and setup descriptor loading
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use setup_vars::config::parse_setup;
//! use setup_vars::core::resolve;
//! use setup_vars::domain::RunIdentity;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let setup = parse_setup(r#"{
//!     "env": { "A": "x", "B": "y", "C": "$A/${B}" },
//!     "secrets": { "DB_PASSWORD": "projects/p/secrets/db" }
//! }"#)?;
//! let identity = RunIdentity::new("my-project", "ci@my-project.iam.gserviceaccount.com")
//!     .with_run_id("run-id");
//!
//! let resolution = resolve(&identity, &setup);
//! assert_eq!(resolution.env().get("C"), Some("x/y"));
//! assert_eq!(resolution.secrets_output(), "DB_PASSWORD:projects/p/secrets/db");
//! # Ok(())
//! # }
//! ```
//!
//! ## Interpolation
//!
//! Every merged value is substituted once against the merged raw values.
//! Chains across variables are not followed:
//!
//! ```rust
//! use setup_vars::core::resolve;
//! use setup_vars::domain::{RunIdentity, SetupDescriptor};
//!
//! let setup = SetupDescriptor::new()
//!     .with_env("A", "x")
//!     .with_env("B", "$A")
//!     .with_env("C", "$B");
//! let resolution = resolve(&RunIdentity::default(), &setup);
//! assert_eq!(resolution.env().get("B"), Some("x"));
//! assert_eq!(resolution.env().get("C"), Some("$A"));
//! ```
//!
//! ## Error Handling
//!
//! Resolution never fails. Loading and exporting return
//! [`domain::SetupVarsError`]:
//!
//! ```rust,no_run
//! use setup_vars::domain::SetupVarsError;
//!
//! fn example() -> Result<(), SetupVarsError> {
//!     let setup = setup_vars::config::load_setup("setup.json")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! setup-vars uses structured logging with the `tracing` crate. Secret
//! identifiers are logged; secret values and the identity token never are.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
