//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use setup_vars::config::{load_config, load_config_or_default, load_setup, HostKind};
use setup_vars::domain::SetupVarsError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("SETUP_VARS_APPLICATION_LOG_LEVEL");
    std::env::remove_var("SETUP_VARS_APPLICATION_DRY_RUN");
    std::env::remove_var("SETUP_VARS_APPLICATION_RUN_ID_LENGTH");
    std::env::remove_var("SETUP_VARS_HOST_KIND");
    std::env::remove_var("SETUP_VARS_HOST_GITHUB_ENV_PATH");
    std::env::remove_var("SETUP_VARS_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("TEST_RUNNER_TEMP");
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = config_file(
        r#"
[application]
log_level = "debug"
dry_run = true
run_id_length = 12

[host]
kind = "shell"
github_env_path = "/tmp/github_env"
github_output_path = "/tmp/github_output"

[logging]
local_enabled = true
local_path = "/var/log/setup-vars"
local_rotation = "never"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.application.run_id_length, 12);
    assert_eq!(config.host.kind, HostKind::Shell);
    assert_eq!(config.host.github_env_path.as_deref(), Some("/tmp/github_env"));
    assert_eq!(
        config.host.github_output_path.as_deref(),
        Some("/tmp/github_output")
    );
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/var/log/setup-vars");
    assert_eq!(config.logging.local_rotation, "never");
}

#[test]
fn test_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = config_file("");
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.application.run_id_length, 6);
    assert_eq!(config.host.kind, HostKind::Github);
    assert!(config.host.github_env_path.is_none());
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_RUNNER_TEMP", "/runner/tmp");

    let temp_file = config_file(
        r#"
[host]
github_env_path = "${TEST_RUNNER_TEMP}/env"
"#,
    );
    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.host.github_env_path.as_deref(), Some("/runner/tmp/env"));

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = config_file(
        r#"
[host]
github_env_path = "${TEST_RUNNER_TEMP}/env"
"#,
    );
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_RUNNER_TEMP"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SETUP_VARS_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("SETUP_VARS_APPLICATION_DRY_RUN", "true");
    std::env::set_var("SETUP_VARS_APPLICATION_RUN_ID_LENGTH", "9");
    std::env::set_var("SETUP_VARS_HOST_KIND", "memory");
    std::env::set_var("SETUP_VARS_LOGGING_LOCAL_ENABLED", "true");

    let temp_file = config_file(
        r#"
[application]
log_level = "info"

[host]
kind = "github"
"#,
    );
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "trace");
    assert!(config.application.dry_run);
    assert_eq!(config.application.run_id_length, 9);
    assert_eq!(config.host.kind, HostKind::Memory);
    assert!(config.logging.local_enabled);

    cleanup_env_vars();
}

#[test]
fn test_env_overrides_without_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SETUP_VARS_HOST_KIND", "shell");
    std::env::set_var("SETUP_VARS_HOST_GITHUB_ENV_PATH", "/tmp/env");

    let config = load_config_or_default(None).unwrap();
    assert_eq!(config.host.kind, HostKind::Shell);
    assert_eq!(config.host.github_env_path.as_deref(), Some("/tmp/env"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_host_override() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SETUP_VARS_HOST_KIND", "jenkins");

    let err = load_config_or_default(None).unwrap_err();
    assert!(matches!(err, SetupVarsError::Configuration(_)));
    assert!(err.to_string().contains("jenkins"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_run_id_length() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = config_file("[application]\nrun_id_length = 0\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("run_id_length"));
}

#[test]
fn test_invalid_rotation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = config_file("[logging]\nlocal_rotation = \"weekly\"\n");
    assert!(load_config(temp_file.path()).is_err());
}

#[test]
fn test_explicit_missing_config_file() {
    let err = load_config_or_default(Some("does-not-exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn test_load_setup_from_file() {
    let temp_file = config_file(r#"{"env": {"A": "x"}, "secrets": {"S": "id"}}"#);
    let setup = load_setup(temp_file.path()).unwrap();
    assert_eq!(setup.env.get("A"), Some("x"));
    assert_eq!(setup.secrets.get("S"), Some("id"));
}

#[test]
fn test_load_setup_rejects_non_object() {
    for contents in [r#"["env"]"#, "null", r#"{"env": {"A": 1}}"#, "{"] {
        let temp_file = config_file(contents);
        let err = load_setup(temp_file.path()).unwrap_err();
        assert!(
            matches!(err, SetupVarsError::Setup(_)),
            "unexpected error for {contents}: {err}"
        );
    }
}
