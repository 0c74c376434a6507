//! Setup descriptor and run identity
//!
//! A setup descriptor names the variables and secrets a run needs. The
//! run identity carries the values that become automatic variables.

use super::varmap::VarMap;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Declarative setup for one run
///
/// Both mappings are optional in the source document and default to empty.
/// Top-level fields other than `env` and `secrets` are ignored.
///
/// # Examples
///
/// ```
/// use setup_vars::domain::SetupDescriptor;
///
/// let setup = SetupDescriptor::new()
///     .with_env("BUCKET", "gs://$PROJECT_ID-artifacts")
///     .with_secret("DB_PASSWORD", "projects/p/secrets/db-password");
///
/// assert_eq!(setup.env.len(), 1);
/// assert_eq!(setup.secrets.get("DB_PASSWORD"), Some("projects/p/secrets/db-password"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetupDescriptor {
    /// Variable name → raw value, interpolated on resolution
    pub env: VarMap,

    /// Secret name → secret identifier, forwarded verbatim
    pub secrets: VarMap,
}

impl SetupDescriptor {
    /// Creates an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overrides a variable
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name, value);
        self
    }

    /// Adds or overrides a secret reference
    pub fn with_secret(mut self, name: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.secrets.insert(name, identifier);
        self
    }
}

struct SetupDescriptorVisitor;

impl<'de> Visitor<'de> for SetupDescriptorVisitor {
    type Value = SetupDescriptor;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a setup object with optional `env` and `secrets` mappings")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut setup = SetupDescriptor::default();
        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "env" => setup.env = access.next_value::<Option<VarMap>>()?.unwrap_or_default(),
                "secrets" => {
                    setup.secrets = access.next_value::<Option<VarMap>>()?.unwrap_or_default()
                }
                _ => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(setup)
    }
}

impl<'de> Deserialize<'de> for SetupDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SetupDescriptorVisitor)
    }
}

/// Identity of the run being set up
///
/// `project_id` and `service_account` are passed through as-is, even when
/// empty. An absent or empty `run_id` is replaced by a generated one at
/// resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunIdentity {
    /// Cloud project the run targets
    pub project_id: String,

    /// Caller-supplied run identifier
    pub run_id: Option<String>,

    /// Service account the run acts as
    pub service_account: String,
}

impl RunIdentity {
    /// Creates an identity without a run id
    pub fn new(project_id: impl Into<String>, service_account: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            run_id: None,
            service_account: service_account.into(),
        }
    }

    /// Sets a fixed run id
    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_object() {
        let setup: SetupDescriptor = serde_json::from_str("{}").unwrap();
        assert!(setup.env.is_empty());
        assert!(setup.secrets.is_empty());
    }

    #[test]
    fn test_deserialize_null_mappings() {
        let setup: SetupDescriptor =
            serde_json::from_str(r#"{"env": null, "secrets": null}"#).unwrap();
        assert_eq!(setup, SetupDescriptor::default());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let setup: SetupDescriptor = serde_json::from_str(
            r#"{"description": "nightly", "env": {"A": "x"}, "extra": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(setup.env.get("A"), Some("x"));
    }

    #[test]
    fn test_deserialize_rejects_array() {
        let result = serde_json::from_str::<SetupDescriptor>(r#"[{"A": "x"}, {}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_string_secret() {
        let result = serde_json::from_str::<SetupDescriptor>(r#"{"secrets": {"A": true}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_preserves_order() {
        let setup = SetupDescriptor::new()
            .with_env("B", "1")
            .with_env("A", "2")
            .with_secret("S", "id");
        let names: Vec<&str> = setup.env.names().collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(setup.secrets.len(), 1);
    }

    #[test]
    fn test_run_identity_builder() {
        let identity = RunIdentity::new("my-project", "sa@example.com").with_run_id("abc");
        assert_eq!(identity.project_id, "my-project");
        assert_eq!(identity.run_id.as_deref(), Some("abc"));
        assert_eq!(identity.service_account, "sa@example.com");
    }
}
