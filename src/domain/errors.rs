//! Domain error types
//!
//! This module defines the error hierarchy for setup-vars.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main setup-vars error type
///
/// This is the primary error type used throughout the crate.
/// Resolution itself never fails; these errors come from the loading
/// layer (configuration and setup descriptors) and from host export calls.
#[derive(Debug, Error)]
pub enum SetupVarsError {
    /// Tool configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed or unreadable setup descriptor
    #[error("Setup descriptor error: {0}")]
    Setup(String),

    /// Host platform export errors
    #[error("Export error: {0}")]
    Export(#[from] HostError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Host platform errors
///
/// Errors raised while pushing resolved values into the automation host.
#[derive(Debug, Error)]
pub enum HostError {
    /// A file command path the host relies on is not configured
    #[error("Host file not configured: {0}")]
    FileNotConfigured(String),

    /// Writing to a host file or command stream failed
    #[error("Failed to write to host: {0}")]
    WriteFailed(String),

    /// The generated heredoc delimiter collides with the exported content
    #[error("Unable to export '{name}': value contains the file command delimiter")]
    DelimiterCollision { name: String },

    /// The host cannot represent the name safely
    #[error("Unable to export {name:?}: {reason}")]
    InvalidName { name: String, reason: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for SetupVarsError {
    fn from(err: std::io::Error) -> Self {
        SetupVarsError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SetupVarsError {
    fn from(err: serde_json::Error) -> Self {
        SetupVarsError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SetupVarsError {
    fn from(err: toml::de::Error) -> Self {
        SetupVarsError::Configuration(format!("TOML parse error: {err}"))
    }
}
