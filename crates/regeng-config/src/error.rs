//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A logical service identifier did not resolve to any backend.
    #[error("Unknown service identifier '{0}' (expected admin, ingestion, opportunity, or compliance)")]
    UnknownService(String),

    /// An operation requires a credential that is not configured.
    #[error("Missing credential for header '{header}' (set it in config or the environment)")]
    MissingCredential { header: &'static str },
}
