//! In-memory host that records every call
//!
//! Used for dry runs and tests.

use super::traits::HostPlatform;
use crate::domain::Result;

/// One recorded host call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `export_variable(name, value)`
    ExportVariable { name: String, value: String },
    /// `set_secret(value)`
    SetSecret(String),
    /// `set_output(name, value)`
    SetOutput { name: String, value: String },
}

impl HostCall {
    /// Shorthand for an `ExportVariable` call
    pub fn export(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ExportVariable {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `SetOutput` call
    pub fn output(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetOutput {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Host that keeps calls in memory, in order
#[derive(Debug, Default)]
pub struct MemoryHost {
    calls: Vec<HostCall>,
}

impl MemoryHost {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls in order
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Exported variables in order
    pub fn exported(&self) -> Vec<(&str, &str)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::ExportVariable { name, value } => Some((name.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Values passed to `set_secret`
    pub fn masked(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SetSecret(value) => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Last value recorded for output `name`
    pub fn output(&self, name: &str) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::SetOutput { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }
}

impl HostPlatform for MemoryHost {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn export_variable(&mut self, name: &str, value: &str) -> Result<()> {
        self.calls.push(HostCall::export(name, value));
        Ok(())
    }

    fn set_secret(&mut self, value: &str) -> Result<()> {
        self.calls.push(HostCall::SetSecret(value.to_string()));
        Ok(())
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.calls.push(HostCall::output(name, value));
        Ok(())
    }
}
