//! Bounded worker-pool runner.
//!
//! A fixed number of OS threads pull unit indices from a shared queue and
//! block for the wait on each one, so `count` units take about
//! `ceil(count / workers) * wait`.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{debug, error};

use super::{reserve_handles, ConcurrencyModel, RunReport, RunnerError};
use crate::timing::Stopwatch;

type SharedQueue = Arc<Mutex<Receiver<usize>>>;

/// Run `count` blocking units on `workers` pooled threads.
///
/// With zero workers and a non-zero count nothing runs and the result is
/// [`RunnerError::Incomplete`].
pub fn run_pool(count: usize, workers: usize, wait: Duration) -> Result<RunReport, RunnerError> {
    run_pool_with_progress(count, workers, wait, &ProgressBar::hidden())
}

/// Same as [`run_pool`], advancing `progress` once per finished unit.
pub fn run_pool_with_progress(
    count: usize,
    workers: usize,
    wait: Duration,
    progress: &ProgressBar,
) -> Result<RunReport, RunnerError> {
    // Never start more threads than there are units.
    let workers = workers.min(count);

    debug!(
        units = count,
        workers = workers,
        wait_ms = wait.as_millis() as u64,
        "Starting worker pool"
    );

    let stopwatch = Stopwatch::start();
    let (sender, receiver) = mpsc::channel();
    let queue: SharedQueue = Arc::new(Mutex::new(receiver));
    let mut handles = reserve_handles(workers)?;

    for index in 0..workers {
        let queue = Arc::clone(&queue);
        let progress = progress.clone();
        let spawned = thread::Builder::new()
            .name(format!("pool-{index}"))
            .spawn(move || drain_queue(&queue, wait, &progress));

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(source) => {
                error!(
                    index = index,
                    live_workers = handles.len(),
                    error = %source,
                    "Failed to spawn pool worker"
                );
                // Nothing is queued yet; dropping the sender lets workers exit.
                drop(sender);
                if let Err(join_err) = join_workers(handles) {
                    error!(error = %join_err, "Pool worker panicked during shutdown");
                }
                return Err(RunnerError::Spawn { index, source });
            }
        }
    }

    for unit in 0..count {
        // Only fails once the receiver is gone.
        if sender.send(unit).is_err() {
            break;
        }
    }
    drop(sender);

    let completed = join_workers(handles)?;
    let elapsed = stopwatch.stop();

    debug!(
        units = count,
        workers = workers,
        elapsed_ms = elapsed.as_millis() as u64,
        "Worker pool drained"
    );

    RunReport::finish(ConcurrencyModel::Pool, count, completed, elapsed)
}

/// Worker loop: take one unit at a time until the queue is closed.
fn drain_queue(queue: &Mutex<Receiver<usize>>, wait: Duration, progress: &ProgressBar) -> usize {
    let mut completed = 0;
    loop {
        let next = match queue.lock() {
            Ok(receiver) => receiver.recv(),
            Err(_) => break,
        };
        if next.is_err() {
            break;
        }
        thread::sleep(wait);
        completed += 1;
        progress.inc(1);
    }
    completed
}

/// Join every worker and sum their completions; report the first panic seen.
fn join_workers(handles: Vec<JoinHandle<usize>>) -> Result<usize, RunnerError> {
    let mut completed = 0;
    let mut first_panic = None;

    for (index, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(done) => completed += done,
            Err(_) => {
                error!(index = index, "Pool worker panicked");
                first_panic.get_or_insert(index);
            }
        }
    }

    match first_panic {
        Some(index) => Err(RunnerError::WorkerPanicked { index }),
        None => Ok(completed),
    }
}
