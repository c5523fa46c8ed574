//! Credential configuration.

use serde::{Deserialize, Serialize};

/// Credentials for the authenticated backends.
///
/// The admin key gates key administration; the API key gates ingestion.
/// Compliance and opportunity reads are unauthenticated. Empty means
/// unconfigured; operations that need a credential fail before any network
/// call is made.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Value sent as `X-Admin-Key` on admin operations.
    #[serde(default)]
    pub admin_key: String,

    /// Value sent as `X-RegEngine-API-Key` on ingestion operations.
    #[serde(default)]
    pub api_key: String,
}

impl AuthConfig {
    #[must_use]
    pub fn has_admin_key(&self) -> bool {
        !self.admin_key.is_empty()
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
