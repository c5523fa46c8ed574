//! Background health polling.
//!
//! Runs on its own fixed interval, independent of the cache and its staleness
//! windows. A failed poll marks the service unhealthy; it never surfaces an
//! error to readers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use regeng_client::ApiClient;
use regeng_config::Service;
use regeng_core::health::{HealthStatus, ServiceHealth};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// How often every service is polled.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Liveness tracker for the four backends. Cheap to clone; all clones share
/// the same status map. Services start as `Unknown` until the first poll.
#[derive(Clone)]
pub struct HealthMonitor {
    statuses: Arc<RwLock<HashMap<Service, HealthStatus>>>,
}

impl Default for HealthMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthMonitor {
    #[must_use]
    pub fn new() -> Self {
        let statuses = Service::ALL
            .into_iter()
            .map(|service| (service, HealthStatus::Unknown))
            .collect();
        Self {
            statuses: Arc::new(RwLock::new(statuses)),
        }
    }

    /// Poll all four services once, concurrently.
    pub async fn poll_once(&self, client: &ApiClient) {
        let (admin, ingestion, opportunity, compliance) = tokio::join!(
            client.health(Service::Admin),
            client.health(Service::Ingestion),
            client.health(Service::Opportunity),
            client.health(Service::Compliance),
        );
        self.record(Service::Admin, admin.is_ok()).await;
        self.record(Service::Ingestion, ingestion.is_ok()).await;
        self.record(Service::Opportunity, opportunity.is_ok()).await;
        self.record(Service::Compliance, compliance.is_ok()).await;
    }

    /// Spawn the polling loop. The task polls immediately, then every
    /// [`POLL_INTERVAL`].
    pub fn spawn(&self, client: Arc<ApiClient>) -> JoinHandle<()> {
        let monitor = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(POLL_INTERVAL);
            loop {
                interval.tick().await;
                monitor.poll_once(&client).await;
            }
        })
    }

    /// Current statuses in display order.
    pub async fn snapshot(&self) -> Vec<ServiceHealth> {
        let statuses = self.statuses.read().await;
        Service::ALL
            .into_iter()
            .map(|service| ServiceHealth {
                service: service.as_str().to_string(),
                status: statuses
                    .get(&service)
                    .copied()
                    .unwrap_or(HealthStatus::Unknown),
            })
            .collect()
    }

    pub(crate) async fn record(&self, service: Service, healthy: bool) {
        let status = if healthy {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        let previous = self.statuses.write().await.insert(service, status);
        if previous != Some(status) {
            tracing::info!(service = service.as_str(), status = status.as_str(), "service health changed");
        }
    }
}
