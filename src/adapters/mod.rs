//! External system integrations for setup-vars.
//!
//! - [`host`] - Automation host platforms (GitHub Actions, shell, in-memory)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the host platform and
//! enable testing with the in-memory recorder:
//!
//! ```rust
//! use setup_vars::adapters::host::{HostPlatform, MemoryHost};
//!
//! # fn example() -> setup_vars::domain::Result<()> {
//! let mut host = MemoryHost::new();
//! host.export_variable("PROJECT_ID", "my-project")?;
//! assert_eq!(host.exported(), [("PROJECT_ID", "my-project")]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod host;
