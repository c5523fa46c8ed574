//! Query error types.
//!
//! Unlike [`regeng_client::ClientError`], these are `Clone`: one failure can
//! fan out to every reader collapsed onto the same in-flight request.

use regeng_client::ClientError;
use thiserror::Error;

/// Error state of a cached key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Network failure: timeout, DNS, connection refused.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend returned a non-2xx status.
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Cache-internal failure in value serialization.
    #[error("internal cache error: {0}")]
    Internal(String),
}

impl From<ClientError> for QueryError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Transport(e) => Self::Transport(e.to_string()),
            ClientError::Remote {
                status, message, ..
            } => Self::Remote { status, message },
            ClientError::Decode { context, source } => {
                Self::Decode(format!("{context}: {source}"))
            }
        }
    }
}

/// Serialize a typed value for the cache store.
pub(crate) fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, QueryError> {
    serde_json::to_value(value).map_err(|e| QueryError::Internal(e.to_string()))
}

/// Decode a cached value back into its typed form.
pub(crate) fn from_value<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, QueryError> {
    serde_json::from_value(value).map_err(|e| QueryError::Internal(e.to_string()))
}
