//! Client error types.

use thiserror::Error;

/// Errors that can occur when calling a RegEngine backend.
///
/// The client never retries or recovers; every failure propagates to the
/// caller exactly once.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure: timeout, DNS, connection refused.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend returned a non-2xx status.
    #[error("remote error ({status}): {message}")]
    Remote {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Backend-supplied error message, or the raw body.
        message: String,
        /// `x-request-id` response header, for correlation with backend logs.
        request_id: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("decode error in {context}: {source}")]
    Decode {
        /// Which operation's response failed to decode.
        context: &'static str,
        source: serde_json::Error,
    },
}
