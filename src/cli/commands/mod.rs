//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod generate_id;
pub mod resolve;
pub mod validate;
