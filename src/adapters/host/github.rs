//! GitHub Actions host
//!
//! Variables and outputs are appended to the runner's file commands
//! (`GITHUB_ENV`, `GITHUB_OUTPUT`) using the heredoc form, and values are
//! masked with the `::add-mask::` workflow command.

use super::traits::HostPlatform;
use crate::domain::{generate_id, HostError, Result};
use std::fs::OpenOptions;
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

/// Environment variable naming the runner's env file
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// Environment variable naming the runner's step output file
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

const DELIMITER_PREFIX: &str = "ghadelimiter_";
const DELIMITER_ID_LENGTH: usize = 20;

/// GitHub Actions host writing file commands and workflow commands
#[derive(Debug)]
pub struct GithubActionsHost<W: Write> {
    env_file: PathBuf,
    output_file: Option<PathBuf>,
    commands: W,
}

impl GithubActionsHost<Stdout> {
    /// Creates a host from the runner environment
    ///
    /// Explicit paths take precedence over `GITHUB_ENV` / `GITHUB_OUTPUT`.
    /// Workflow commands go to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if no env file path is available.
    pub fn from_env(env_file: Option<&str>, output_file: Option<&str>) -> Result<Self> {
        let env_file = env_file
            .map(str::to_string)
            .or_else(|| std::env::var(GITHUB_ENV).ok())
            .filter(|path| !path.is_empty())
            .ok_or_else(|| HostError::FileNotConfigured(GITHUB_ENV.to_string()))?;

        let output_file = output_file
            .map(str::to_string)
            .or_else(|| std::env::var(GITHUB_OUTPUT).ok())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        if output_file.is_none() {
            tracing::warn!("{GITHUB_OUTPUT} is not set, step outputs will be skipped");
        }

        Ok(Self::new(env_file, output_file, std::io::stdout()))
    }
}

impl<W: Write> GithubActionsHost<W> {
    /// Creates a host writing to explicit files and command stream
    pub fn new(env_file: impl Into<PathBuf>, output_file: Option<PathBuf>, commands: W) -> Self {
        Self {
            env_file: env_file.into(),
            output_file,
            commands,
        }
    }

    /// Consumes the host and returns the workflow command stream
    pub fn into_commands(self) -> W {
        self.commands
    }
}

/// Rejects names that would change how the runner splits a file command
///
/// The runner reads `NAME=value` lines as well as `NAME<<DELIM` blocks, so a
/// name holding `=`, `<<` or a line break could define other variables.
fn validate_file_command_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains(['\n', '\r']) {
        Some("name contains a line break")
    } else if name.contains('=') {
        Some("name contains '='")
    } else if name.contains("<<") {
        Some("name contains '<<'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(HostError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Appends `name<<delimiter` / value / `delimiter` to a file command
fn append_file_command(path: &Path, name: &str, value: &str) -> Result<()> {
    validate_file_command_name(name)?;

    let delimiter = format!("{DELIMITER_PREFIX}{}", generate_id(DELIMITER_ID_LENGTH));
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(HostError::DelimiterCollision {
            name: name.to_string(),
        }
        .into());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| HostError::WriteFailed(format!("{}: {}", path.display(), e)))?;

    write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")
        .map_err(|e| HostError::WriteFailed(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

/// Escapes data for a workflow command (`%`, `\r`, `\n`)
fn escape_command_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl<W: Write> HostPlatform for GithubActionsHost<W> {
    fn name(&self) -> &'static str {
        "github"
    }

    fn export_variable(&mut self, name: &str, value: &str) -> Result<()> {
        append_file_command(&self.env_file, name, value)
    }

    fn set_secret(&mut self, value: &str) -> Result<()> {
        writeln!(self.commands, "::add-mask::{}", escape_command_data(value))
            .and_then(|_| self.commands.flush())
            .map_err(|e| HostError::WriteFailed(format!("workflow command stream: {e}")))?;
        Ok(())
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => append_file_command(path, name, value),
            None => {
                tracing::debug!(output = %name, "No output file, skipping step output");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SetupVarsError;
    use tempfile::TempDir;

    fn parse_file_commands(contents: &str) -> Vec<(String, String)> {
        let mut commands = Vec::new();
        let mut lines = contents.lines();
        while let Some(header) = lines.next() {
            let (name, delimiter) = header.split_once("<<").unwrap();
            let mut value_lines = Vec::new();
            for line in lines.by_ref() {
                if line == delimiter {
                    break;
                }
                value_lines.push(line);
            }
            commands.push((name.to_string(), value_lines.join("\n")));
        }
        commands
    }

    #[test]
    fn test_export_variable_appends_heredoc() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("github_env");
        let mut host = GithubActionsHost::new(&env_file, None, Vec::new());

        host.export_variable("A", "x").unwrap();
        host.export_variable("MULTI", "line one\nline two").unwrap();

        let contents = std::fs::read_to_string(&env_file).unwrap();
        assert!(contents.contains(&format!("A<<{DELIMITER_PREFIX}")));
        assert_eq!(
            parse_file_commands(&contents),
            [
                ("A".to_string(), "x".to_string()),
                ("MULTI".to_string(), "line one\nline two".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_secret_writes_add_mask() {
        let dir = TempDir::new().unwrap();
        let mut host = GithubActionsHost::new(dir.path().join("env"), None, Vec::new());

        host.set_secret("tok%en\nsecond").unwrap();

        let commands = String::from_utf8(host.into_commands()).unwrap();
        assert_eq!(commands, "::add-mask::tok%25en%0Asecond\n");
    }

    #[test]
    fn test_set_output_without_file_is_noop() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("env");
        let mut host = GithubActionsHost::new(&env_file, None, Vec::new());

        host.set_output("secrets", "A:x").unwrap();
        assert!(!env_file.exists());
    }

    #[test]
    fn test_set_output_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let output_file = dir.path().join("output");
        let mut host =
            GithubActionsHost::new(dir.path().join("env"), Some(output_file.clone()), Vec::new());

        host.set_output("secrets", "A:x\nB:y").unwrap();

        let contents = std::fs::read_to_string(&output_file).unwrap();
        assert_eq!(
            parse_file_commands(&contents),
            [("secrets".to_string(), "A:x\nB:y".to_string())]
        );
    }

    #[test]
    fn test_unwritable_env_file() {
        let dir = TempDir::new().unwrap();
        let mut host = GithubActionsHost::new(dir.path(), None, Vec::new());

        let err = host.export_variable("A", "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write to host"));
    }

    #[test]
    fn test_rejects_names_that_break_file_commands() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("env");
        let output_file = dir.path().join("output");
        let mut host =
            GithubActionsHost::new(&env_file, Some(output_file.clone()), Vec::new());

        for name in [
            "NODE_OPTIONS=--require /tmp/evil.js\nA",
            "A\nB",
            "A\rB",
            "A=B",
            "A<<EOF",
            "",
        ] {
            let err = host.export_variable(name, "x").unwrap_err();
            assert!(
                matches!(err, SetupVarsError::Export(HostError::InvalidName { .. })),
                "unexpected error for {name:?}: {err}"
            );
        }
        let err = host.set_output("a=b", "x").unwrap_err();
        assert!(matches!(
            err,
            SetupVarsError::Export(HostError::InvalidName { .. })
        ));

        assert!(!env_file.exists());
        assert!(!output_file.exists());
    }

    #[test]
    fn test_accepts_names_with_other_punctuation() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("env");
        let mut host = GithubActionsHost::new(&env_file, None, Vec::new());

        host.export_variable("A.B-C", "x").unwrap();

        let contents = std::fs::read_to_string(&env_file).unwrap();
        assert_eq!(
            parse_file_commands(&contents),
            [("A.B-C".to_string(), "x".to_string())]
        );
    }

    #[test]
    fn test_escape_command_data() {
        assert_eq!(escape_command_data("plain"), "plain");
        assert_eq!(escape_command_data("a\r\nb%"), "a%0D%0Ab%25");
    }
}
