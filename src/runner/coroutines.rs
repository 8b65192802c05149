//! Cooperative-task runner.
//!
//! Units are tokio tasks with a single suspension point each
//! (`tokio::time::sleep`). Run inside a `current_thread` runtime, every task
//! shares one OS thread and yields it while waiting.

use std::future::Future;
use std::time::Duration;

use indicatif::ProgressBar;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinSet;
use tracing::debug;

use super::{ConcurrencyModel, RunReport, RunnerError};
use crate::timing::Stopwatch;

/// Build the single-threaded cooperative scheduler.
pub fn current_thread_runtime() -> Result<Runtime, RunnerError> {
    Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(RunnerError::Runtime)
}

/// Drive `future` to completion on a fresh single-threaded scheduler.
pub fn run_on_current_thread<F, T>(future: F) -> Result<T, RunnerError>
where
    F: Future<Output = Result<T, RunnerError>>,
{
    current_thread_runtime()?.block_on(future)
}

/// Spawn `count` suspending tasks and wait for all of them.
pub async fn run_coroutines(count: usize, wait: Duration) -> Result<RunReport, RunnerError> {
    run_coroutines_with_progress(count, wait, &ProgressBar::hidden()).await
}

/// Same as [`run_coroutines`], advancing `progress` once per finished task.
pub async fn run_coroutines_with_progress(
    count: usize,
    wait: Duration,
    progress: &ProgressBar,
) -> Result<RunReport, RunnerError> {
    debug!(
        units = count,
        wait_ms = wait.as_millis() as u64,
        "Spawning cooperative tasks"
    );

    let stopwatch = Stopwatch::start();
    let mut tasks = JoinSet::new();

    for _ in 0..count {
        tasks.spawn(tokio::time::sleep(wait));
    }

    let mut completed = 0;
    while let Some(joined) = tasks.join_next().await {
        joined?;
        completed += 1;
        progress.inc(1);
    }

    let elapsed = stopwatch.stop();

    debug!(
        units = count,
        elapsed_ms = elapsed.as_millis() as u64,
        "All cooperative tasks completed"
    );

    RunReport::finish(ConcurrencyModel::Coroutines, count, completed, elapsed)
}
