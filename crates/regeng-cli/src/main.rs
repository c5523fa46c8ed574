use std::sync::Arc;

use clap::Parser;
use regeng_client::ApiClient;
use regeng_config::RegEngineConfig;
use regeng_query::Queries;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rge error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = RegEngineConfig::load_with_dotenv()?;
    tracing::debug!(base_url = %config.services.base_url, "configuration loaded");
    let client = Arc::new(ApiClient::new(&config.services));
    let queries = Queries::new(Arc::clone(&client));

    commands::dispatch(cli, &config, &client, &queries).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("REGENGINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
