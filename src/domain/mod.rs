//! Domain models and types for setup-vars.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Ordered mappings** ([`VarMap`]) with override-preserves-position semantics
//! - **Inputs** ([`SetupDescriptor`], [`RunIdentity`])
//! - **Run identifiers** ([`RunId`], [`generate_id`])
//! - **Error types** ([`SetupVarsError`], [`HostError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use setup_vars::domain::{RunIdentity, SetupDescriptor};
//!
//! let identity = RunIdentity::new("my-project", "ci@my-project.iam.gserviceaccount.com")
//!     .with_run_id("run-id");
//! let setup: SetupDescriptor =
//!     serde_json::from_str(r#"{"env": {"BUCKET": "gs://$PROJECT_ID"}}"#).unwrap();
//! assert_eq!(setup.env.get("BUCKET"), Some("gs://$PROJECT_ID"));
//! # let _ = identity;
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod setup;
pub mod varmap;

// Re-export commonly used types for convenience
pub use errors::{HostError, SetupVarsError};
pub use ids::{generate_id, RunId, DEFAULT_ID_LENGTH};
pub use result::Result;
pub use setup::{RunIdentity, SetupDescriptor};
pub use varmap::VarMap;
