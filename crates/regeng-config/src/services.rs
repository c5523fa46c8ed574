//! Service identifiers and address resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Logical identifier of one backend service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Admin,
    Ingestion,
    Opportunity,
    Compliance,
}

impl Service {
    /// All backends, in the order they are displayed.
    pub const ALL: [Self; 4] = [
        Self::Admin,
        Self::Ingestion,
        Self::Opportunity,
        Self::Compliance,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Ingestion => "ingestion",
            Self::Opportunity => "opportunity",
            Self::Compliance => "compliance",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "ingestion" => Ok(Self::Ingestion),
            "opportunity" => Ok(Self::Opportunity),
            "compliance" => Ok(Self::Compliance),
            other => Err(ConfigError::UnknownService(other.to_string())),
        }
    }
}

/// Default base host shared by all services.
fn default_base_url() -> String {
    String::from("http://localhost")
}

const fn default_admin_port() -> u16 {
    8400
}

const fn default_ingestion_port() -> u16 {
    8000
}

const fn default_opportunity_port() -> u16 {
    8300
}

const fn default_compliance_port() -> u16 {
    8500
}

/// Base host and per-service port map.
///
/// Resolved once at process start; immutable thereafter (no hot reload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Scheme + host without a port (e.g. `http://localhost`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_admin_port")]
    pub admin_port: u16,

    #[serde(default = "default_ingestion_port")]
    pub ingestion_port: u16,

    #[serde(default = "default_opportunity_port")]
    pub opportunity_port: u16,

    #[serde(default = "default_compliance_port")]
    pub compliance_port: u16,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            admin_port: default_admin_port(),
            ingestion_port: default_ingestion_port(),
            opportunity_port: default_opportunity_port(),
            compliance_port: default_compliance_port(),
        }
    }
}

impl ServicesConfig {
    #[must_use]
    pub const fn port(&self, service: Service) -> u16 {
        match service {
            Service::Admin => self.admin_port,
            Service::Ingestion => self.ingestion_port,
            Service::Opportunity => self.opportunity_port,
            Service::Compliance => self.compliance_port,
        }
    }

    /// Fully-qualified base address for one service.
    #[must_use]
    pub fn url(&self, service: Service) -> String {
        format!("{}:{}", self.base_url.trim_end_matches('/'), self.port(service))
    }
}
