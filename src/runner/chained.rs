//! Sequential baseline: each task is spawned only after the previous one
//! finished, so the batch takes roughly `count * wait`.

use std::time::Duration;

use indicatif::ProgressBar;
use tracing::debug;

use super::{ConcurrencyModel, RunReport, RunnerError};
use crate::timing::measure_async;

/// Run `count` suspending tasks one after another.
pub async fn run_chained(count: usize, wait: Duration) -> Result<RunReport, RunnerError> {
    run_chained_with_progress(count, wait, &ProgressBar::hidden()).await
}

/// Same as [`run_chained`], advancing `progress` after each link.
pub async fn run_chained_with_progress(
    count: usize,
    wait: Duration,
    progress: &ProgressBar,
) -> Result<RunReport, RunnerError> {
    debug!(
        units = count,
        wait_ms = wait.as_millis() as u64,
        "Starting task chain"
    );

    let (completed, elapsed) = measure_async(async {
        let mut completed = 0;
        for _ in 0..count {
            tokio::spawn(tokio::time::sleep(wait)).await?;
            completed += 1;
            progress.inc(1);
        }
        Ok::<_, RunnerError>(completed)
    })
    .await;
    let completed = completed?;

    RunReport::finish(ConcurrencyModel::Chained, count, completed, elapsed)
}
