//! Service liveness types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a `GET /health` response.
///
/// The backends return `{"status": "ok"}`; `service` is optional on the wire
/// and filled in by the caller from the service it polled.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: String,
}

/// Liveness of one backend, derived solely from the last poll outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Unknown,
}

impl HealthStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One service's liveness as reported by the health poller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServiceHealth {
    pub service: String,
    pub status: HealthStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn health_response_without_service_field() {
        let resp: HealthResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(resp.status, "ok");
        assert!(resp.service.is_empty());
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            r#""unhealthy""#
        );
        assert_eq!(HealthStatus::Unknown.to_string(), "unknown");
    }
}
