//! Configuration schema types
//!
//! This module defines the structure of `setup-vars.toml`. Every section is
//! optional and falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host platform selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// GitHub Actions file and workflow commands
    #[default]
    Github,
    /// `export NAME='value'` lines on stdout
    Shell,
    /// In-memory recorder (nothing leaves the process)
    Memory,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostKind::Github => write!(f, "github"),
            HostKind::Shell => write!(f, "shell"),
            HostKind::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for HostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" => Ok(HostKind::Github),
            "shell" => Ok(HostKind::Shell),
            "memory" => Ok(HostKind::Memory),
            _ => Err(format!(
                "Invalid host '{s}'. Must be one of: github, shell, memory"
            )),
        }
    }
}

/// Main setup-vars configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupVarsConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Host platform settings
    #[serde(default)]
    pub host: HostConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SetupVarsConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (record exports in memory instead of writing to the host)
    #[serde(default)]
    pub dry_run: bool,

    /// Length of generated run ids
    #[serde(default = "default_run_id_length")]
    pub run_id_length: usize,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
            run_id_length: default_run_id_length(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        if self.run_id_length == 0 || self.run_id_length > 64 {
            return Err(format!(
                "application.run_id_length must be between 1 and 64, got {}",
                self.run_id_length
            ));
        }

        Ok(())
    }
}

/// Host platform configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Host to export to
    #[serde(default)]
    pub kind: HostKind,

    /// Overrides `GITHUB_ENV`
    #[serde(default)]
    pub github_env_path: Option<String>,

    /// Overrides `GITHUB_OUTPUT`
    #[serde(default)]
    pub github_output_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_run_id_length() -> usize {
    crate::domain::DEFAULT_ID_LENGTH
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
