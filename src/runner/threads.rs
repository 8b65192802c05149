//! Thread-per-unit runner.
//!
//! Every unit is a dedicated OS thread that blocks in `thread::sleep` for the
//! whole wait, so `count` units hold `count` live threads at once.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{debug, error};

use super::{reserve_handles, ConcurrencyModel, RunReport, RunnerError};
use crate::timing::Stopwatch;

/// Spawn `count` blocking threads and join them all.
pub fn run_threads(count: usize, wait: Duration) -> Result<RunReport, RunnerError> {
    run_threads_with_progress(count, wait, &ProgressBar::hidden())
}

/// Same as [`run_threads`], advancing `progress` once per joined thread.
pub fn run_threads_with_progress(
    count: usize,
    wait: Duration,
    progress: &ProgressBar,
) -> Result<RunReport, RunnerError> {
    debug!(
        units = count,
        wait_ms = wait.as_millis() as u64,
        "Spawning worker threads"
    );

    let stopwatch = Stopwatch::start();
    let mut handles = reserve_handles(count)?;

    for index in 0..count {
        let spawned = thread::Builder::new()
            .name(format!("worker-{index}"))
            .spawn(move || thread::sleep(wait));

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(source) => {
                return Err(abandon_after_spawn_failure(
                    index, source, handles, progress,
                ))
            }
        }
    }

    let completed = join_all(handles, progress)?;
    let elapsed = stopwatch.stop();

    debug!(
        units = count,
        elapsed_ms = elapsed.as_millis() as u64,
        "All worker threads joined"
    );

    RunReport::finish(ConcurrencyModel::Threads, count, completed, elapsed)
}

/// Join the threads that did start, then report the spawn failure.
///
/// The spawn error is returned even if a running worker also panicked; the
/// panic is logged alongside it.
fn abandon_after_spawn_failure(
    index: usize,
    source: std::io::Error,
    handles: Vec<JoinHandle<()>>,
    progress: &ProgressBar,
) -> RunnerError {
    error!(
        index = index,
        live_threads = handles.len(),
        error = %source,
        "Failed to spawn worker thread"
    );

    if let Err(join_err) = join_all(handles, progress) {
        error!(
            spawn_index = index,
            error = %join_err,
            "Worker panicked while draining after spawn failure"
        );
    }

    RunnerError::Spawn { index, source }
}

/// Join every handle, even after a panic, and report the first panic seen.
fn join_all(handles: Vec<JoinHandle<()>>, progress: &ProgressBar) -> Result<usize, RunnerError> {
    let mut completed = 0;
    let mut first_panic = None;

    for (index, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(()) => {
                completed += 1;
                progress.inc(1);
            }
            Err(_) => {
                error!(index = index, "Worker thread panicked");
                first_panic.get_or_insert(index);
            }
        }
    }

    match first_panic {
        Some(index) => Err(RunnerError::WorkerPanicked { index }),
        None => Ok(completed),
    }
}
