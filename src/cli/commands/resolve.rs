//! Resolve command implementation
//!
//! This module implements the `resolve` command: load the setup descriptor,
//! resolve it against the run identity, and export the result to the host.

use crate::adapters::host::create_host;
use crate::config::schema::{HostKind, SetupVarsConfig};
use crate::config::{load_setup, secret_string, SecretString};
use crate::core::{export, IdentityToken, Resolver, ID_TOKEN};
use crate::domain::{Result, RunIdentity, SetupVarsError};
use crate::log_error_with_context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use zeroize::Zeroize;

/// Output printed on stdout after exporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// No stdout output beyond what the host writes
    Text,
    /// The resolution as `{"env": {...}, "secrets": "..."}`
    Json,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the JSON setup descriptor
    #[arg(short, long, env = "SETUP_VARS_SETUP")]
    pub setup: PathBuf,

    /// Project id exported as PROJECT_ID
    #[arg(long, env = "SETUP_VARS_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Service account exported as SERVICE_ACCOUNT
    #[arg(long, env = "SETUP_VARS_SERVICE_ACCOUNT")]
    pub service_account: Option<String>,

    /// Run id exported as RUN_ID (generated when absent or empty)
    #[arg(long, env = "SETUP_VARS_RUN_ID")]
    pub run_id: Option<String>,

    /// Identity token exported as ID_TOKEN
    #[arg(long, env = "SETUP_VARS_ID_TOKEN", hide_env_values = true, value_parser = parse_secret)]
    pub id_token: Option<SecretString>,

    /// File holding the identity token (used when --id-token is not given)
    #[arg(long, env = "SETUP_VARS_ID_TOKEN_FILE")]
    pub id_token_file: Option<PathBuf>,

    /// Host platform to export to (overrides the configuration)
    #[arg(long, value_enum)]
    pub host: Option<HostKind>,

    /// Output format (`json` cannot be combined with the shell host)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Resolve and log without writing to the host
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_secret(value: &str) -> std::result::Result<SecretString, String> {
    Ok(secret_string(value.to_string()))
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self, config: &SetupVarsConfig) -> anyhow::Result<i32> {
        tracing::info!(setup = %self.setup.display(), "Resolving setup descriptor");

        let setup = match load_setup(&self.setup) {
            Ok(setup) => setup,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load setup descriptor");
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let token = match self.identity_token() {
            Ok(token) => token,
            Err(e) => {
                log_error_with_context!(&e, "Failed to read identity token");
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let identity = RunIdentity {
            project_id: self.project_id.clone().unwrap_or_default(),
            run_id: self.run_id.clone(),
            service_account: self.service_account.clone().unwrap_or_default(),
        };
        if identity.project_id.is_empty() {
            tracing::warn!("No project id given, PROJECT_ID will be empty");
        }
        if identity.service_account.is_empty() {
            tracing::warn!("No service account given, SERVICE_ACCOUNT will be empty");
        }

        let resolution = Resolver::new()
            .with_run_id_length(config.application.run_id_length)
            .resolve(&identity, &setup);

        let kind = if self.dry_run || config.application.dry_run {
            tracing::info!("Dry run, exports are recorded in memory only");
            HostKind::Memory
        } else {
            self.host.unwrap_or(config.host.kind)
        };

        if kind == HostKind::Shell && self.format == OutputFormat::Json {
            // The shell host's stdout is meant for eval
            tracing::error!("--format json cannot share stdout with the shell host");
            eprintln!(
                "❌ --format json cannot be combined with the shell host, which writes to stdout"
            );
            return Ok(2);
        }

        let mut host = create_host(kind, &config.host)?;
        let summary = export(host.as_mut(), &resolution, &token)?;

        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }

        eprintln!(
            "✅ Exported {} variables and {} to the {} host",
            summary.variables_exported, ID_TOKEN, summary.host
        );
        if let Some(run_id) = resolution.run_id() {
            eprintln!("   Run ID: {run_id}");
        }
        eprintln!("   Secrets forwarded: {}", summary.secrets_forwarded);

        Ok(0)
    }

    /// Picks the identity token from the flag/env, then the token file
    ///
    /// A missing token is exported as an empty value.
    fn identity_token(&self) -> Result<IdentityToken> {
        if let Some(token) = &self.id_token {
            return Ok(IdentityToken::new(
                token.clone(),
                "--id-token / SETUP_VARS_ID_TOKEN",
            ));
        }

        if let Some(path) = &self.id_token_file {
            let mut contents = std::fs::read_to_string(path).map_err(|e| {
                SetupVarsError::Configuration(format!(
                    "Failed to read identity token file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let token = secret_string(contents.trim_end().to_string());
            contents.zeroize();
            return Ok(IdentityToken::new(
                token,
                format!("file {}", path.display()),
            ));
        }

        tracing::warn!("No identity token provided, {ID_TOKEN} will be empty");
        Ok(IdentityToken::new(secret_string(String::new()), "not provided"))
    }
}
