//! Admin service types: API key issuance and listing.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `POST /admin/keys`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An issued API key credential record.
///
/// `api_key` is the plaintext secret and is present only in the creation
/// response; the listing endpoint never returns it. Callers that cache
/// records must call [`ApiKeyRecord::redacted`] first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiKeyRecord {
    /// Server-assigned stable identity, used for revocation.
    pub key_id: String,
    /// Plaintext secret. Creation response only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiKeyRecord {
    /// Copy of the record with the plaintext secret dropped.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            api_key: None,
            ..self.clone()
        }
    }
}
