//! Core resolution logic for setup-vars.
//!
//! - [`substitute`] - `$NAME` / `${ NAME }` substitution within one string
//! - [`resolver`] - merge of automatic and custom variables, secret forwarding
//! - [`exporter`] - hand-off of a resolution to the host platform
//!
//! Resolution is pure and synchronous; it is fully computed before the
//! exporter makes its first host call.
//!
//! # Example
//!
//! ```rust
//! use setup_vars::adapters::host::MemoryHost;
//! use setup_vars::config::secret_string;
//! use setup_vars::core::{export, resolve, IdentityToken};
//! use setup_vars::domain::{RunIdentity, SetupDescriptor};
//!
//! # fn example() -> setup_vars::domain::Result<()> {
//! let identity = RunIdentity::new("my-project", "ci@my-project.iam.gserviceaccount.com");
//! let setup = SetupDescriptor::new().with_env("BUCKET", "gs://$PROJECT_ID-$RUN_ID");
//! let resolution = resolve(&identity, &setup);
//!
//! let token = IdentityToken::new(secret_string("token".to_string()), "example");
//! let mut host = MemoryHost::new();
//! let summary = export(&mut host, &resolution, &token)?;
//! assert_eq!(summary.variables_exported, 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod exporter;
pub mod resolver;
pub mod substitute;

pub use exporter::{export, ExportSummary, IdentityToken, ID_TOKEN, SECRETS_OUTPUT};
pub use resolver::{resolve, Resolution, Resolver, AUTOMATIC_VARIABLES};
pub use substitute::{substitute, Substitutor};
