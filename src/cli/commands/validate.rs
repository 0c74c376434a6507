//! Validate-setup command implementation
//!
//! Loads a setup descriptor and reports what it declares, plus references
//! that resolution would leave verbatim.

use crate::config::load_setup;
use crate::core::substitute::referenced_names;
use crate::core::AUTOMATIC_VARIABLES;
use crate::domain::SetupDescriptor;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate-setup command
#[derive(Args, Debug)]
pub struct ValidateSetupArgs {
    /// Path to the JSON setup descriptor
    #[arg(short, long, env = "SETUP_VARS_SETUP")]
    pub setup: PathBuf,
}

/// A `$NAME` reference that no variable will satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Variable whose value holds the reference
    pub variable: String,

    /// Referenced name
    pub reference: String,

    /// The reference names a secret, which is never a substitution source
    pub is_secret: bool,
}

/// Finds references in `env` values that neither an automatic nor a custom
/// variable defines
pub fn unresolved_references(setup: &SetupDescriptor) -> Vec<UnresolvedReference> {
    let mut unresolved = Vec::new();

    for (variable, value) in setup.env.iter() {
        for reference in referenced_names(value) {
            if AUTOMATIC_VARIABLES.contains(&reference.as_str())
                || setup.env.contains_key(&reference)
            {
                continue;
            }
            unresolved.push(UnresolvedReference {
                variable: variable.to_string(),
                is_secret: setup.secrets.contains_key(&reference),
                reference,
            });
        }
    }

    unresolved
}

impl ValidateSetupArgs {
    /// Execute the validate-setup command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(setup = %self.setup.display(), "Validating setup descriptor");

        println!("🔍 Validating setup descriptor: {}", self.setup.display());
        println!();

        let setup = match load_setup(&self.setup) {
            Ok(setup) => {
                println!("✅ Setup descriptor loaded successfully");
                setup
            }
            Err(e) => {
                println!("❌ Failed to load setup descriptor");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!();
        println!("Automatic variables: {}", AUTOMATIC_VARIABLES.join(", "));
        println!("Variables ({}):", setup.env.len());
        for (name, value) in setup.env.iter() {
            let marker = if AUTOMATIC_VARIABLES.contains(&name) {
                " (overrides automatic value)"
            } else {
                ""
            };
            println!("  {name} = {value}{marker}");
        }
        println!("Secrets ({}):", setup.secrets.len());
        for (name, identifier) in setup.secrets.iter() {
            println!("  {name} -> {identifier}");
        }

        let unresolved = unresolved_references(&setup);
        println!();
        if unresolved.is_empty() {
            println!("✅ All references resolve");
        } else {
            println!("⚠️  References left verbatim:");
            for item in &unresolved {
                let note = if item.is_secret {
                    " (secrets are not interpolated)"
                } else {
                    ""
                };
                println!("  {}: ${}{}", item.variable, item.reference, note);
            }
        }
        println!();

        Ok(0)
    }
}
