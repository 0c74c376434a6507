//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console logs on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use setup_vars::logging::init_logging;
//! use setup_vars::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log one exported variable with its resolved value
///
/// # Example
///
/// ```no_run
/// use setup_vars::log_variable;
///
/// log_variable!("PROJECT_ID", "my-project");
/// ```
#[macro_export]
macro_rules! log_variable {
    ($name:expr, $value:expr) => {
        tracing::info!(name = %$name, value = %$value, "Variable exported");
    };
}

/// Log one forwarded secret by name and identifier, never by value
///
/// # Example
///
/// ```no_run
/// use setup_vars::log_secret;
///
/// log_secret!("DB_PASSWORD", "projects/p/secrets/db-password");
/// ```
#[macro_export]
macro_rules! log_secret {
    ($name:expr, $identifier:expr) => {
        tracing::info!(name = %$name, identifier = %$identifier, "Secret forwarded");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use setup_vars::log_error_with_context;
/// use setup_vars::domain::SetupVarsError;
///
/// let error = SetupVarsError::Setup("not an object".to_string());
/// log_error_with_context!(&error, "Failed to load setup descriptor");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
