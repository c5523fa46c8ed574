//! `rge ingest`: document URL submission.

use regeng_client::ingestion::{API_KEY_HEADER, is_absolute_url};
use regeng_config::{ConfigError, RegEngineConfig};
use regeng_query::Queries;

use crate::cli::OutputFormat;
use crate::output;

pub async fn handle(
    url: &str,
    config: &RegEngineConfig,
    queries: &Queries,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if !is_absolute_url(url) {
        anyhow::bail!("'{url}' is not an absolute URL");
    }
    if !config.auth.has_api_key() {
        return Err(ConfigError::MissingCredential {
            header: API_KEY_HEADER,
        }
        .into());
    }

    let response = queries.ingest_url(&config.auth.api_key, url).await?;
    output::output(&response, format)
}
