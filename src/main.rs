use anyhow::{Context, Result};
use clap::Parser;
use review_feed::utils::logging;
use review_feed::{App, Config};
use std::io::Read;
use std::path::PathBuf;

/// Extract blog and document text for every message of one queue event.
///
/// Prints the handler response JSON to stdout.
#[derive(Debug, Parser)]
#[command(name = "extract_contents", version)]
struct Args {
    /// Event JSON file; reads stdin when omitted
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config
    let config = Config::load().context("failed to load configuration")?;

    // Init logging
    logging::init(config.verbose_logging);

    let raw = match &args.event {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read event file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read event from stdin")?;
            buf
        }
    };
    let event: serde_json::Value =
        serde_json::from_str(&raw).context("event is not valid JSON")?;

    let app = App::initialize(config)?;
    let response = app.handle(event).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
