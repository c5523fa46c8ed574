//! # regeng-client
//!
//! Typed HTTP clients for the four RegEngine backend services:
//! - admin (API key issuance and revocation)
//! - ingestion (document URL submission)
//! - compliance (industries, checklists, config validation)
//! - opportunity (cross-jurisdiction arbitrage and gaps)
//!
//! Each remote operation is one async method attempting exactly one request.
//! The client does no caching and no retries; both belong to callers
//! (`regeng-query` for reads). Failures are never swallowed: they surface as
//! [`ClientError::Transport`], [`ClientError::Remote`], or
//! [`ClientError::Decode`].

mod error;
mod http;

pub mod admin;
pub mod compliance;
pub mod ingestion;
pub mod opportunity;

pub use error::ClientError;

use regeng_config::{Service, ServicesConfig};
use regeng_core::HealthResponse;

use crate::http::{check_response, decode_json};

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// HTTP client bound to the four resolved service base addresses.
pub struct ApiClient {
    http: reqwest::Client,
    admin_base: String,
    ingestion_base: String,
    opportunity_base: String,
    compliance_base: String,
}

impl ApiClient {
    /// Create a client from resolved service addresses.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(services: &ServicesConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("regengine-cli/0.1")
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client should build"),
            admin_base: services.url(Service::Admin),
            ingestion_base: services.url(Service::Ingestion),
            opportunity_base: services.url(Service::Opportunity),
            compliance_base: services.url(Service::Compliance),
        }
    }

    /// Base address for one service.
    #[must_use]
    pub fn base(&self, service: Service) -> &str {
        match service {
            Service::Admin => &self.admin_base,
            Service::Ingestion => &self.ingestion_base,
            Service::Opportunity => &self.opportunity_base,
            Service::Compliance => &self.compliance_base,
        }
    }

    /// `GET /health` against one service.
    ///
    /// The backends return `{"status": "ok"}` without naming themselves; the
    /// `service` field is filled in from the polled identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or a
    /// malformed body.
    pub async fn health(&self, service: Service) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base(service));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let mut health: HealthResponse = decode_json(resp, "health").await?;
        if health.service.is_empty() {
            health.service = service.as_str().to_string();
        }
        Ok(health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bases_resolve_from_config() {
        let client = ApiClient::new(&ServicesConfig::default());
        assert_eq!(client.base(Service::Admin), "http://localhost:8400");
        assert_eq!(client.base(Service::Ingestion), "http://localhost:8000");
        assert_eq!(client.base(Service::Opportunity), "http://localhost:8300");
        assert_eq!(client.base(Service::Compliance), "http://localhost:8500");
    }

    #[tokio::test]
    #[ignore] // requires running services
    async fn live_health_all_services() {
        let client = ApiClient::new(&ServicesConfig::default());
        for service in Service::ALL {
            match client.health(service).await {
                Ok(health) => println!("{service}: {}", health.status),
                Err(e) => println!("{service}: ERROR {e}"),
            }
        }
    }
}
