//! Main entry point for the concurrency-showdown CLI

use clap::Parser;
use concurrency_showdown::cli::Cli;
use concurrency_showdown::driver::run_benchmarks;
use concurrency_showdown::metrics;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber with optional JSON formatting.
///
/// Logs go to stderr; stdout is reserved for the elapsed-time lines.
fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("concurrency_showdown=warn"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(addr) = cli.metrics_addr {
        metrics::init_metrics(addr)?;
    }

    let config = cli.to_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_benchmarks(&config, &mut out)?;
    Ok(())
}

// Not #[tokio::main]: the thread runner must run outside any runtime, and the
// cooperative runner builds its own current_thread scheduler.
fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Benchmark failed: {:#}", e);
        std::process::exit(1);
    }
}
