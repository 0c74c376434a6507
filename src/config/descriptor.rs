//! Setup descriptor loading
//!
//! Reads the JSON setup descriptor from disk. Shape errors (a top-level value
//! that is not an object, non-string values) are reported here so that the
//! resolver only ever sees well-typed mappings.

use crate::domain::errors::SetupVarsError;
use crate::domain::result::Result;
use crate::domain::SetupDescriptor;
use std::fs;
use std::path::Path;

/// Parses a setup descriptor from JSON text
///
/// # Examples
///
/// ```
/// use setup_vars::config::parse_setup;
///
/// let setup = parse_setup(r#"{"env": {"A": "x"}, "secrets": {"S": "id"}}"#).unwrap();
/// assert_eq!(setup.env.get("A"), Some("x"));
/// ```
///
/// # Errors
///
/// Returns [`SetupVarsError::Setup`] when the document is not a JSON object of
/// string-to-string mappings.
pub fn parse_setup(contents: &str) -> Result<SetupDescriptor> {
    serde_json::from_str(contents)
        .map_err(|e| SetupVarsError::Setup(format!("Invalid setup descriptor: {e}")))
}

/// Loads a setup descriptor from a JSON file
///
/// # Errors
///
/// Returns [`SetupVarsError::Setup`] when the file is missing, unreadable or
/// malformed.
pub fn load_setup(path: impl AsRef<Path>) -> Result<SetupDescriptor> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        SetupVarsError::Setup(format!(
            "Failed to read setup descriptor {}: {}",
            path.display(),
            e
        ))
    })?;

    let setup = parse_setup(&contents).map_err(|e| match e {
        SetupVarsError::Setup(msg) => SetupVarsError::Setup(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        variables = setup.env.len(),
        secrets = setup.secrets.len(),
        "Setup descriptor loaded"
    );

    Ok(setup)
}
