//! `rge arbitrage | gaps`.

use chrono::{DateTime, Utc};
use regeng_core::opportunity::{ArbitrageFilter, GapFilter};
use regeng_query::Queries;

use crate::cli::OutputFormat;
use crate::output;

#[allow(clippy::too_many_arguments)]
pub async fn arbitrage(
    queries: &Queries,
    j1: Option<String>,
    j2: Option<String>,
    concept: Option<String>,
    rel_delta: Option<f64>,
    limit: Option<u32>,
    since: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let since = since.map(|raw| parse_since(&raw)).transpose()?;
    let filter = ArbitrageFilter {
        j1,
        j2,
        concept,
        rel_delta,
        limit,
        since,
    };
    let items = queries.arbitrage(&filter).await?;
    output::output(&items, format)
}

pub async fn gaps(
    queries: &Queries,
    j1: Option<String>,
    j2: Option<String>,
    limit: Option<u32>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let filter = GapFilter { j1, j2, limit };
    let gaps = queries.gaps(&filter).await?;
    output::output(&gaps, format)
}

fn parse_since(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("--since must be an RFC 3339 timestamp: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_parses_rfc3339() {
        let parsed = parse_since("2025-06-01T00:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-01T00:00:00+00:00");
    }

    #[test]
    fn since_rejects_bare_dates() {
        assert!(parse_since("2025-06-01").is_err());
    }
}
