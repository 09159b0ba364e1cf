use anyhow::{bail, Context, Result};
use clap::Parser;
use review_feed::clients::SqsQueue;
use review_feed::utils::logging;
use review_feed::{Config, Producer};
use std::path::PathBuf;
use std::sync::Arc;

/// Read a CSV/Excel file of URL pairs and send one queue message per row.
#[derive(Debug, Parser)]
#[command(name = "enqueue_urls", version)]
struct Args {
    /// Path to the .csv or .xlsx file to process
    file_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    logging::init(config.verbose_logging);

    if !config.queue_configured() {
        bail!(review_feed::error::ConfigError::QueueNotConfigured);
    }

    logging::log_startup("producer", &format!("input: {}", args.file_path.display()));

    let queue = SqsQueue::from_env(config.queue_url.clone()).await;
    let producer = Producer::new(Arc::new(queue));

    let stats = producer
        .process_file(&args.file_path)
        .await
        .with_context(|| format!("failed to process {}", args.file_path.display()))?;

    logging::print_final_stats("rows", stats.success, stats.attempted);

    Ok(())
}
