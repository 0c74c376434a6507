//! Host platform abstraction
//!
//! This module defines the capabilities an automation host must provide so
//! resolved variables can reach later steps of a run.

use crate::domain::Result;

/// Capabilities supplied by the host automation platform
///
/// Implementations decide how a variable becomes visible to subsequent
/// steps and how a value is redacted from the host's logs.
pub trait HostPlatform {
    /// Short host name used in logs and summaries
    fn name(&self) -> &'static str;

    /// Makes `name=value` visible to subsequent steps of the run
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects or cannot record the variable.
    fn export_variable(&mut self, name: &str, value: &str) -> Result<()>;

    /// Asks the host to redact `value` from all subsequent log output
    ///
    /// # Errors
    ///
    /// Returns an error if the masking instruction cannot be delivered.
    fn set_secret(&mut self, value: &str) -> Result<()>;

    /// Publishes a step output
    ///
    /// Hosts without step outputs ignore the call.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot record the output.
    fn set_output(&mut self, name: &str, _value: &str) -> Result<()> {
        tracing::debug!(host = self.name(), output = %name, "Host has no step outputs, skipping");
        Ok(())
    }
}
