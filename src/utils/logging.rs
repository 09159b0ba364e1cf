//! Logging helpers
//!
//! Subscriber setup plus the banner/summary lines shared by both binaries.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when `verbose`.
/// Output goes to stderr so stdout can carry the JSON response.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log the startup banner
///
/// # Arguments
/// - `component`: which binary is starting
/// - `detail`: one line of context (input file, record count, ...)
pub fn log_startup(component: &str, detail: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} started", component);
    info!("📋 {}", detail);
    info!("{}", "=".repeat(60));
}

/// Print final statistics
///
/// # Arguments
/// - `label`: what was counted ("rows", "messages")
/// - `success`: number that went through
/// - `total`: number attempted
pub fn print_final_stats(label: &str, success: usize, total: usize) {
    info!("{}", "=".repeat(60));
    info!("📊 Done");
    info!(
        "Finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ Succeeded: {}/{} {}", success, total, label);
    info!("❌ Skipped or failed: {}", total.saturating_sub(success));
    info!("{}", "=".repeat(60));
}
