//! Host platform adapters
//!
//! This module provides a trait-based abstraction over the automation host,
//! with implementations for GitHub Actions, POSIX shells and an in-memory
//! recorder.

pub mod factory;
pub mod github;
pub mod memory;
pub mod shell;
pub mod traits;

pub use factory::create_host;
pub use github::GithubActionsHost;
pub use memory::{HostCall, MemoryHost};
pub use shell::ShellHost;
pub use traits::HostPlatform;
