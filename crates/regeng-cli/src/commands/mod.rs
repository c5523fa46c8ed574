//! Command handlers for the `rge` binary.

use std::sync::Arc;

use regeng_client::ApiClient;
use regeng_config::RegEngineConfig;
use regeng_query::Queries;

use crate::cli::{Cli, Commands};

mod compliance;
mod health;
mod ingest;
mod keys;
mod opportunity;

/// Route one parsed command to its handler.
pub async fn dispatch(
    cli: Cli,
    config: &RegEngineConfig,
    client: &Arc<ApiClient>,
    queries: &Queries,
) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Commands::Health { watch } => health::handle(client, watch, format).await,
        Commands::Keys { action } => {
            keys::handle(&action, config, queries, format, cli.quiet).await
        }
        Commands::Ingest { url } => ingest::handle(&url, config, queries, format).await,
        Commands::Industries => compliance::industries(queries, format).await,
        Commands::Checklists { industry } => {
            compliance::checklists(queries, industry.as_deref(), format).await
        }
        Commands::Checklist { id } => compliance::checklist(queries, &id, format).await,
        Commands::Validate {
            checklist_id,
            config: config_path,
        } => compliance::validate(queries, &checklist_id, &config_path, format).await,
        Commands::Arbitrage {
            j1,
            j2,
            concept,
            rel_delta,
            limit,
            since,
        } => {
            opportunity::arbitrage(queries, j1, j2, concept, rel_delta, limit, since, format).await
        }
        Commands::Gaps { j1, j2, limit } => {
            opportunity::gaps(queries, j1, j2, limit, format).await
        }
    }
}
