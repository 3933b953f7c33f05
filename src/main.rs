//! ethlogfilter CLI - fetch and filter EVM event logs

use clap::Parser;
use ethlogfilter::{output, query, Config, LogFetcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Config::parse();

    // Log to stderr; stdout carries the JSON result
    let filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    run(cli).await
}

async fn run(cli: Config) -> anyhow::Result<()> {
    let path = match cli.config_file.clone() {
        Some(path) => path,
        None => Config::default_path()?,
    };
    tracing::debug!(path = %path.display(), "reading config file");
    let file = Config::load(&path)?;

    let config = Config::overlay(file, cli);

    if config.verbose {
        println!("Filter addresses: {:?}", config.addresses);
        println!("Filter topics: {:?}", config.topics);
        println!("Filter tx hashes: {:?}", config.tx_hashes);
    }

    let fetcher = LogFetcher::connect(&config).await?;
    let logs = fetcher.fetch(&query::build(&config)).await?;
    tracing::info!(count = logs.len(), "fetched logs");

    let logs = output::filter_by_tx_hashes(logs, &config.tx_hashes);
    tracing::debug!(count = logs.len(), "retained after tx-hash filter");

    let stdout = std::io::stdout();
    output::emit(&mut stdout.lock(), &logs, config.output_file.as_deref())?;

    Ok(())
}
