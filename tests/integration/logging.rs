//! Integration tests for logging and tracing

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[test]
fn test_tracing_with_structured_fields() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("concurrency_showdown=trace"))
        .with_test_writer()
        .try_init();

    info!(model = "threads", units = 10, "Runner started");
    warn!(model = "coroutines", elapsed_ms = 1500, "Runner slower than expected");
}

#[test]
fn test_tracing_json_format() {
    // Fails only if another test already installed a global subscriber
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new("concurrency_showdown=info"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_env_filter_parsing() {
    assert!(EnvFilter::try_new("concurrency_showdown=warn").is_ok());
    assert!(EnvFilter::try_new("info,concurrency_showdown::runner=debug").is_ok());
}
