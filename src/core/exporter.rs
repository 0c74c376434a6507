//! Export of a resolution into the host platform
//!
//! The exporter takes a fully computed [`Resolution`] and an [`IdentityToken`]
//! and pushes them through a [`HostPlatform`]. Secret identifiers are logged;
//! secret values and the identity token never are.

use super::resolver::Resolution;
use crate::adapters::host::HostPlatform;
use crate::config::SecretString;
use crate::domain::Result;
use crate::{log_secret, log_variable};
use secrecy::ExposeSecret;

/// Variable name the identity token is exported under
pub const ID_TOKEN: &str = "ID_TOKEN";

/// Step output carrying the secret forwarding entries
pub const SECRETS_OUTPUT: &str = "secrets";

/// Privileged identity token plus a description of where it came from
#[derive(Debug)]
pub struct IdentityToken {
    value: SecretString,
    provenance: String,
}

impl IdentityToken {
    /// Wraps a token value with its provenance
    pub fn new(value: SecretString, provenance: impl Into<String>) -> Self {
        Self {
            value,
            provenance: provenance.into(),
        }
    }

    /// Where the token came from, safe to log
    pub fn provenance(&self) -> &str {
        &self.provenance
    }
}

/// Counts reported after an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of resolved variables exported (excluding `ID_TOKEN`)
    pub variables_exported: usize,

    /// Number of secret references forwarded
    pub secrets_forwarded: usize,

    /// Host the results were exported to
    pub host: String,
}

/// Exports `resolution` and `token` through `host`
///
/// Call order: every resolved variable, then `set_secret` for the token,
/// then `ID_TOKEN`, then the `secrets` step output.
///
/// # Errors
///
/// Returns the first error raised by the host. Calls made before the failure
/// are not rolled back.
pub fn export(
    host: &mut dyn HostPlatform,
    resolution: &Resolution,
    token: &IdentityToken,
) -> Result<ExportSummary> {
    tracing::info!(host = host.name(), "Exporting variables");

    for (name, value) in resolution.env().iter() {
        host.export_variable(name, value)?;
        log_variable!(name, value);
    }

    let token_value: &str = token.value.expose_secret().as_ref();
    host.set_secret(token_value)?;
    host.export_variable(ID_TOKEN, token_value)?;
    tracing::info!(
        name = ID_TOKEN,
        source = %token.provenance(),
        "Identity token exported (masked)"
    );

    for (name, identifier) in resolution.secrets().iter() {
        log_secret!(name, identifier);
    }
    host.set_output(SECRETS_OUTPUT, &resolution.secrets_output())?;

    Ok(ExportSummary {
        variables_exported: resolution.env().len(),
        secrets_forwarded: resolution.secrets().len(),
        host: host.name().to_string(),
    })
}
