//! Variable and secret resolution
//!
//! Merges the automatic run variables with the descriptor's `env`, substitutes
//! every merged value against the merged raw mapping, and turns the descriptor's
//! `secrets` into forwarding entries.

use super::substitute::Substitutor;
use crate::domain::{RunId, RunIdentity, SetupDescriptor, VarMap, DEFAULT_ID_LENGTH};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Automatic variable holding the project id
pub const PROJECT_ID: &str = "PROJECT_ID";
/// Automatic variable holding the run id
pub const RUN_ID: &str = "RUN_ID";
/// Automatic variable holding the service account
pub const SERVICE_ACCOUNT: &str = "SERVICE_ACCOUNT";

/// Automatic variable names, in the order they lead the merged mapping
pub const AUTOMATIC_VARIABLES: [&str; 3] = [PROJECT_ID, RUN_ID, SERVICE_ACCOUNT];

/// Outcome of a resolution
///
/// Serializes as `{"env": {...}, "secrets": "NAME:id\n..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    env: VarMap,
    secrets: VarMap,
}

impl Resolution {
    /// Resolved variables in merged order
    pub fn env(&self) -> &VarMap {
        &self.env
    }

    /// Forwarded secrets (name to identifier) in descriptor order
    pub fn secrets(&self) -> &VarMap {
        &self.secrets
    }

    /// `name:identifier` entries joined by newlines, empty when there are none
    pub fn secrets_output(&self) -> String {
        self.secrets
            .iter()
            .map(|(name, identifier)| forwarding_entry(name, identifier))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The run id this resolution was computed for
    pub fn run_id(&self) -> Option<&str> {
        self.env.get(RUN_ID)
    }
}

impl Serialize for Resolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Resolution", 2)?;
        state.serialize_field("env", &self.env)?;
        state.serialize_field("secrets", &self.secrets_output())?;
        state.end()
    }
}

/// Resolver with a configurable generated run id length
#[derive(Debug, Clone)]
pub struct Resolver {
    run_id_length: usize,
}

impl Resolver {
    /// Creates a resolver generating run ids of [`DEFAULT_ID_LENGTH`]
    pub fn new() -> Self {
        Self {
            run_id_length: DEFAULT_ID_LENGTH,
        }
    }

    /// Sets the length of generated run ids
    pub fn with_run_id_length(mut self, length: usize) -> Self {
        self.run_id_length = length;
        self
    }

    /// Resolves `setup` for the run described by `identity`
    ///
    /// # Examples
    ///
    /// ```
    /// use setup_vars::core::Resolver;
    /// use setup_vars::domain::{RunIdentity, SetupDescriptor};
    ///
    /// let identity = RunIdentity::new("my-project", "sa@example.com").with_run_id("run-id");
    /// let setup = SetupDescriptor::new()
    ///     .with_env("BUCKET", "gs://${PROJECT_ID}/$RUN_ID")
    ///     .with_secret("TOKEN", "projects/p/secrets/token");
    ///
    /// let resolution = Resolver::new().resolve(&identity, &setup);
    /// assert_eq!(resolution.env().get("BUCKET"), Some("gs://my-project/run-id"));
    /// assert_eq!(resolution.secrets_output(), "TOKEN:projects/p/secrets/token");
    /// ```
    pub fn resolve(&self, identity: &RunIdentity, setup: &SetupDescriptor) -> Resolution {
        let run_id = RunId::from_optional(identity.run_id.as_deref(), self.run_id_length);
        let merged = merge_variables(automatic_variables(identity, &run_id), &setup.env);

        let substitutor = Substitutor::new(&merged);
        let env = merged
            .iter()
            .map(|(name, raw)| (name, substitutor.apply(raw)))
            .collect();

        let secrets = setup.secrets.clone();

        tracing::debug!(
            run_id = %run_id,
            variables = merged.len(),
            secrets = secrets.len(),
            "Setup resolved"
        );

        Resolution { env, secrets }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves `setup` with the default resolver
pub fn resolve(identity: &RunIdentity, setup: &SetupDescriptor) -> Resolution {
    Resolver::new().resolve(identity, setup)
}

/// Builds `PROJECT_ID`, `RUN_ID`, `SERVICE_ACCOUNT` in that order
pub fn automatic_variables(identity: &RunIdentity, run_id: &RunId) -> VarMap {
    [
        (PROJECT_ID, identity.project_id.as_str()),
        (RUN_ID, run_id.as_str()),
        (SERVICE_ACCOUNT, identity.service_account.as_str()),
    ]
    .into_iter()
    .collect()
}

/// Overlays `custom` onto `automatic`
///
/// A custom name matching an automatic one replaces the value in place; other
/// custom names follow in their own order.
pub fn merge_variables(mut automatic: VarMap, custom: &VarMap) -> VarMap {
    automatic.overlay(custom);
    automatic
}

/// Formats one forwarded secret as `name:identifier`, both untouched
pub fn forwarding_entry(name: &str, identifier: &str) -> String {
    format!("{name}:{identifier}")
}
