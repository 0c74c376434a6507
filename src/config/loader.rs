//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SetupVarsConfig;
use crate::domain::errors::SetupVarsError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file looked up when none is given
pub const DEFAULT_CONFIG_FILE: &str = "setup-vars.toml";

/// Loads configuration from an explicit path, the default file, or defaults
///
/// An explicit path must exist. Without one, `setup-vars.toml` in the working
/// directory is used when present; otherwise built-in defaults apply.
/// Environment overrides are applied in every case.
///
/// # Errors
///
/// Returns an error if an explicit file is missing or any loaded
/// configuration is invalid.
pub fn load_config_or_default(path: Option<&str>) -> Result<SetupVarsConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE),
        None => {
            let mut config = SetupVarsConfig::default();
            apply_env_overrides(&mut config)?;
            config.validate().map_err(|e| {
                SetupVarsError::Configuration(format!("Configuration validation failed: {e}"))
            })?;
            Ok(config)
        }
    }
}

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SetupVarsConfig
/// 4. Applies environment variable overrides (SETUP_VARS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use setup_vars::config::loader::load_config;
///
/// let config = load_config("setup-vars.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SetupVarsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SetupVarsError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SetupVarsError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SetupVarsConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SetupVarsError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Substitutes process environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is a valid regex");
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed_line = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SetupVarsError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SETUP_VARS_* prefix
///
/// Environment variables follow the pattern: SETUP_VARS_<SECTION>_<KEY>
/// For example: SETUP_VARS_HOST_KIND, SETUP_VARS_APPLICATION_DRY_RUN
///
/// # Errors
///
/// Returns an error if an override cannot be parsed
fn apply_env_overrides(config: &mut SetupVarsConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SETUP_VARS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SETUP_VARS_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SETUP_VARS_APPLICATION_RUN_ID_LENGTH") {
        config.application.run_id_length = val.parse().map_err(|_| {
            SetupVarsError::Configuration(format!(
                "SETUP_VARS_APPLICATION_RUN_ID_LENGTH must be a number, got '{val}'"
            ))
        })?;
    }

    // Host overrides
    if let Ok(val) = std::env::var("SETUP_VARS_HOST_KIND") {
        config.host.kind = val.parse().map_err(SetupVarsError::Configuration)?;
    }
    if let Ok(val) = std::env::var("SETUP_VARS_HOST_GITHUB_ENV_PATH") {
        config.host.github_env_path = Some(val);
    }
    if let Ok(val) = std::env::var("SETUP_VARS_HOST_GITHUB_OUTPUT_PATH") {
        config.host.github_output_path = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SETUP_VARS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SETUP_VARS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SETUP_VARS_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
