//! Configuration management for setup-vars.
//!
//! Two kinds of input are loaded here:
//!
//! - The **tool configuration** (`setup-vars.toml`, optional) selecting the
//!   host platform, log level and logging outputs
//! - The **setup descriptor** (JSON) naming the variables and secrets of a run
//!
//! # Tool Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//! run_id_length = 6
//!
//! [host]
//! kind = "github"
//! # github_env_path = "${RUNNER_TEMP}/env"
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! `${VAR_NAME}` placeholders are filled from the process environment, and
//! any key can be overridden with `SETUP_VARS_<SECTION>_<KEY>`.
//!
//! # Setup Descriptor
//!
//! ```json
//! {
//!   "env": { "BUCKET": "gs://${ PROJECT_ID }-artifacts/$RUN_ID" },
//!   "secrets": { "DB_PASSWORD": "projects/my-project/secrets/db-password" }
//! }
//! ```
//!
//! ```rust,no_run
//! use setup_vars::config::{load_config_or_default, load_setup};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default(None)?;
//! let setup = load_setup("setup.json")?;
//! println!("Host: {}, variables: {}", config.host.kind, setup.env.len());
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use descriptor::{load_setup, parse_setup};
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, HostConfig, HostKind, LoggingConfig, SetupVarsConfig};
pub use secret::{secret_string, SecretString, SecretValue};
