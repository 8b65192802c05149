//! Runner metrics
//!
//! Every runner invocation records its elapsed time and unit count through the
//! `metrics` facade. Without an installed recorder the macros are no-ops; with
//! `--metrics-addr` a Prometheus exporter serves them for scraping.
//!
//! ## Metrics
//!
//! - `runner_elapsed_seconds` (histogram, label `model`)
//! - `runner_units_total` (counter, label `model`)
//! - `runner_failures_total` (counter, labels `model`, `error`)

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;
use once_cell::sync::OnceCell;
use std::net::SocketAddr;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::runner::{ConcurrencyModel, RunReport, RunnerError};

/// Address the exporter was installed on, set once
static METRICS_ADDR: OnceCell<SocketAddr> = OnceCell::new();

/// Metrics errors
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Exporter could not be installed (port in use, recorder already set, ...)
    #[error("failed to install Prometheus exporter on {addr}: {reason}")]
    Install {
        /// Requested listen address
        addr: SocketAddr,
        /// Exporter error message
        reason: String,
    },
}

/// Install the Prometheus exporter on `addr`.
///
/// Idempotent: later calls are ignored once an exporter is running.
pub fn init_metrics(addr: SocketAddr) -> Result<(), MetricsError> {
    if let Some(existing) = METRICS_ADDR.get() {
        debug!("Metrics already initialized on {}, skipping", existing);
        return Ok(());
    }

    info!("Initializing metrics system on {}", addr);

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| MetricsError::Install {
            addr,
            reason: e.to_string(),
        })?;

    describe_histogram!(
        "runner_elapsed_seconds",
        Unit::Seconds,
        "Wall-clock time for a runner to complete all of its units"
    );

    describe_counter!(
        "runner_units_total",
        Unit::Count,
        "Total number of worker units run to completion"
    );

    describe_counter!(
        "runner_failures_total",
        Unit::Count,
        "Total number of runner invocations that failed"
    );

    let _ = METRICS_ADDR.set(addr);
    Ok(())
}

/// Check if the exporter has been installed
pub fn is_initialized() -> bool {
    METRICS_ADDR.get().is_some()
}

/// Tracks one runner invocation
pub struct RunMetrics {
    model: ConcurrencyModel,
    units: usize,
    start_time: Instant,
}

impl RunMetrics {
    /// Start tracking a runner invocation
    pub fn start(model: ConcurrencyModel, units: usize) -> Self {
        info!(model = model.key(), units = units, "Runner started");

        Self {
            model,
            units,
            start_time: Instant::now(),
        }
    }

    /// Record a completed run
    pub fn record_success(&self, report: &RunReport) {
        histogram!("runner_elapsed_seconds", "model" => self.model.key())
            .record(report.elapsed_secs());
        counter!("runner_units_total", "model" => self.model.key())
            .increment(report.completed as u64);

        info!(
            model = self.model.key(),
            units = report.completed,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Runner completed"
        );
    }

    /// Record a failed run
    pub fn record_failure(&self, err: &RunnerError) {
        counter!(
            "runner_failures_total",
            "model" => self.model.key(),
            "error" => error_kind(err),
        )
        .increment(1);

        error!(
            model = self.model.key(),
            units = self.units,
            error = %err,
            duration_ms = self.start_time.elapsed().as_millis() as u64,
            "Runner failed"
        );
    }
}

fn error_kind(err: &RunnerError) -> &'static str {
    match err {
        RunnerError::Spawn { .. } => "spawn",
        RunnerError::Allocation { .. } => "allocation",
        RunnerError::WorkerPanicked { .. } => "panic",
        RunnerError::TaskJoin(_) => "join",
        RunnerError::Runtime(_) => "runtime",
        RunnerError::Incomplete { .. } => "incomplete",
    }
}
