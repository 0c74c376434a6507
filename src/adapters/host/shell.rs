//! POSIX shell host
//!
//! Writes `export NAME='value'` lines suitable for `eval "$(setup-vars ...)"`.
//! A shell has no log masking and no step outputs, so those calls only log.

use super::traits::HostPlatform;
use crate::domain::{HostError, Result};
use regex::Regex;
use std::io::{Stdout, Write};
use std::sync::OnceLock;

/// Host emitting shell `export` statements
#[derive(Debug)]
pub struct ShellHost<W: Write> {
    out: W,
}

impl ShellHost<Stdout> {
    /// Shell host writing to stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ShellHost<W> {
    /// Shell host writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the host and returns the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn shell_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("shell name pattern is a valid regex")
    })
}

/// Rejects names a POSIX shell would not read as a single identifier
///
/// The output is meant for `eval`, so the name is never quoted and must not
/// carry shell syntax.
fn validate_shell_name(name: &str) -> Result<()> {
    if shell_name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(HostError::InvalidName {
            name: name.to_string(),
            reason: "shell variable names must match [A-Za-z_][A-Za-z0-9_]*".to_string(),
        }
        .into())
    }
}

/// Single-quotes `value` for POSIX shells
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

impl<W: Write> HostPlatform for ShellHost<W> {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn export_variable(&mut self, name: &str, value: &str) -> Result<()> {
        validate_shell_name(name)?;
        writeln!(self.out, "export {}={}", name, shell_quote(value))
            .map_err(|e| HostError::WriteFailed(format!("shell output: {e}")))?;
        Ok(())
    }

    fn set_secret(&mut self, _value: &str) -> Result<()> {
        tracing::debug!("Shell host cannot mask values");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SetupVarsError;

    #[test]
    fn test_export_variable_quotes_value() {
        let mut host = ShellHost::new(Vec::new());
        host.export_variable("A", "x y").unwrap();
        host.export_variable("B", "it's $HOME").unwrap();

        let out = String::from_utf8(host.into_inner()).unwrap();
        assert_eq!(out, "export A='x y'\nexport B='it'\\''s $HOME'\n");
    }

    #[test]
    fn test_rejects_names_carrying_shell_syntax() {
        let mut host = ShellHost::new(Vec::new());

        for name in ["A=1; touch /tmp/x; B", "", "1A", "A-B", "A B", "A\nB", "$(id)"] {
            let err = host.export_variable(name, "x").unwrap_err();
            assert!(
                matches!(err, SetupVarsError::Export(HostError::InvalidName { .. })),
                "unexpected error for {name:?}: {err}"
            );
        }

        assert!(host.into_inner().is_empty());
    }

    #[test]
    fn test_accepts_identifier_names() {
        let mut host = ShellHost::new(Vec::new());
        host.export_variable("_A1", "x").unwrap();
        host.export_variable("lower_case", "y").unwrap();

        let out = String::from_utf8(host.into_inner()).unwrap();
        assert_eq!(out, "export _A1='x'\nexport lower_case='y'\n");
    }

    #[test]
    fn test_set_secret_and_output_write_nothing() {
        let mut host = ShellHost::new(Vec::new());
        host.set_secret("token").unwrap();
        host.set_output("secrets", "A:x").unwrap();

        assert!(host.into_inner().is_empty());
    }
}
