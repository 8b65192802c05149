//! Benchmark driver
//!
//! Runs the runners strictly one after another: OS threads first, then the
//! cooperative tasks on one `current_thread` scheduler, then the optional
//! worker pool and task chain. A result line is written and flushed as soon as
//! each runner finishes, so the two default lines always come first.

use std::io::Write;

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::metrics::{MetricsError, RunMetrics};
use crate::progress::create_progress_bar;
use crate::runner::chained::run_chained_with_progress;
use crate::runner::coroutines::{current_thread_runtime, run_coroutines_with_progress};
use crate::runner::pool::run_pool_with_progress;
use crate::runner::threads::run_threads_with_progress;
use crate::runner::{ConcurrencyModel, RunReport, RunnerError};
use crate::timing::measure;

/// Driver errors
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A runner failed
    #[error("runner error: {0}")]
    Runner(#[from] RunnerError),

    /// Writing a result line failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Metrics exporter error
    #[error("metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

/// Run every enabled runner in order, writing one line per runner to `out`.
pub fn run_benchmarks<W: Write>(
    config: &BenchConfig,
    out: &mut W,
) -> Result<Vec<RunReport>, BenchError> {
    info!(
        threads = config.thread_count,
        tasks = config.task_count,
        chain = config.chain_length,
        pool_workers = ?config.pool_workers,
        wait_ms = config.wait.as_millis() as u64,
        "Starting benchmarks"
    );

    let mut reports = Vec::with_capacity(4);

    let report = observe(
        ConcurrencyModel::Threads,
        config.thread_count,
        config.show_progress,
        |progress| run_threads_with_progress(config.thread_count, config.wait, progress),
    )?;
    write_report(out, &report)?;
    reports.push(report);

    let runtime = current_thread_runtime()?;

    let report = observe(
        ConcurrencyModel::Coroutines,
        config.task_count,
        config.show_progress,
        |progress| {
            runtime.block_on(run_coroutines_with_progress(
                config.task_count,
                config.wait,
                progress,
            ))
        },
    )?;
    write_report(out, &report)?;
    reports.push(report);

    if let Some(workers) = config.pool_workers {
        let report = observe(
            ConcurrencyModel::Pool,
            config.thread_count,
            config.show_progress,
            |progress| {
                run_pool_with_progress(config.thread_count, workers, config.wait, progress)
            },
        )?;
        write_report(out, &report)?;
        reports.push(report);
    }

    if config.chain_enabled() {
        let report = observe(
            ConcurrencyModel::Chained,
            config.chain_length,
            config.show_progress,
            |progress| {
                runtime.block_on(run_chained_with_progress(
                    config.chain_length,
                    config.wait,
                    progress,
                ))
            },
        )?;
        write_report(out, &report)?;
        reports.push(report);
    }

    Ok(reports)
}

/// Wrap one runner invocation with a progress bar and metrics.
fn observe<F>(
    model: ConcurrencyModel,
    units: usize,
    show_progress: bool,
    run: F,
) -> Result<RunReport, RunnerError>
where
    F: FnOnce(&ProgressBar) -> Result<RunReport, RunnerError>,
{
    let progress = create_progress_bar(model, units, show_progress);
    let metrics = RunMetrics::start(model, units);

    let (result, wall) = measure(|| run(&progress));
    progress.finish_and_clear();

    // Includes runtime entry and progress setup on top of the runner's own clock.
    debug!(
        model = model.key(),
        wall_ms = wall.as_millis() as u64,
        "Runner returned"
    );

    match &result {
        Ok(report) => metrics.record_success(report),
        Err(e) => metrics.record_failure(e),
    }
    result
}

fn write_report<W: Write>(out: &mut W, report: &RunReport) -> std::io::Result<()> {
    writeln!(out, "{report}")?;
    out.flush()
}
