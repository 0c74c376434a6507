//! Host factory
//!
//! This module creates the host platform selected by configuration.

use super::github::GithubActionsHost;
use super::memory::MemoryHost;
use super::shell::ShellHost;
use super::traits::HostPlatform;
use crate::config::schema::{HostConfig, HostKind};
use crate::domain::Result;

/// Create a host platform for `kind`
///
/// # Arguments
///
/// * `kind` - Which host to create
/// * `config` - Host settings (file command overrides for GitHub)
///
/// # Errors
///
/// Returns an error if the selected host cannot be set up, e.g. GitHub
/// Actions without an env file.
pub fn create_host(kind: HostKind, config: &HostConfig) -> Result<Box<dyn HostPlatform>> {
    match kind {
        HostKind::Github => {
            tracing::info!("Creating GitHub Actions host");
            let host = GithubActionsHost::from_env(
                config.github_env_path.as_deref(),
                config.github_output_path.as_deref(),
            )?;
            Ok(Box::new(host))
        }
        HostKind::Shell => {
            tracing::info!("Creating shell host");
            Ok(Box::new(ShellHost::stdout()))
        }
        HostKind::Memory => {
            tracing::info!("Creating in-memory host");
            Ok(Box::new(MemoryHost::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_memory_host() {
        let host = create_host(HostKind::Memory, &HostConfig::default()).unwrap();
        assert_eq!(host.name(), "memory");
    }

    #[test]
    fn test_create_shell_host() {
        let host = create_host(HostKind::Shell, &HostConfig::default()).unwrap();
        assert_eq!(host.name(), "shell");
    }

    #[test]
    fn test_create_github_host_with_explicit_paths() {
        let dir = TempDir::new().unwrap();
        let config = HostConfig {
            github_env_path: Some(dir.path().join("env").to_string_lossy().to_string()),
            github_output_path: Some(dir.path().join("out").to_string_lossy().to_string()),
            ..HostConfig::default()
        };

        let host = create_host(HostKind::Github, &config).unwrap();
        assert_eq!(host.name(), "github");
    }
}
