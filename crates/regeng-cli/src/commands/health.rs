//! `rge health`: one-shot or continuous liveness checks.

use std::sync::Arc;

use regeng_client::ApiClient;
use regeng_query::{HealthMonitor, POLL_INTERVAL};

use crate::cli::OutputFormat;
use crate::output;

pub async fn handle(
    client: &Arc<ApiClient>,
    watch: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let monitor = HealthMonitor::new();
    monitor.poll_once(client).await;
    output::output(&monitor.snapshot().await, format)?;
    if !watch {
        return Ok(());
    }

    // The background poller keeps the statuses current; this loop only
    // prints the latest snapshot on the same cadence.
    let _poller = monitor.spawn(Arc::clone(client));
    let mut ticks = tokio::time::interval(POLL_INTERVAL);
    ticks.tick().await; // the first tick completes immediately
    loop {
        ticks.tick().await;
        output::output(&monitor.snapshot().await, format)?;
    }
}
