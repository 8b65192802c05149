//! Benchmark configuration constants

use std::time::Duration;

/// Number of OS threads spawned by the thread-based runner.
/// 10,000 concurrently-live threads is enough to make the per-thread cost
/// visible without exceeding default process limits on most Linux hosts.
pub const DEFAULT_THREAD_COUNT: usize = 10_000;

/// Number of tasks spawned by the cooperative runner.
/// Ten times the thread count, all on a single scheduler thread.
pub const DEFAULT_TASK_COUNT: usize = 100_000;

/// Length of the sequential chain. Zero disables the chained runner.
pub const DEFAULT_CHAIN_LENGTH: usize = 0;

/// Upper bound accepted for `--pool-workers`.
pub const MAX_POOL_WORKERS: usize = 1_024;

/// How long every unit waits before completing, in milliseconds.
pub const DEFAULT_WAIT_MS: u64 = 1_000; // 1 second

/// Upper bound accepted for `--wait-ms`.
pub const MAX_WAIT_MS: u64 = 60_000;

/// Resolved settings for one benchmark invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Units for the thread-based runner.
    pub thread_count: usize,
    /// Units for the cooperative runner.
    pub task_count: usize,
    /// Units for the chained runner (0 = skip).
    pub chain_length: usize,
    /// Worker threads for the pool runner, which runs `thread_count` units
    /// (`None` = skip).
    pub pool_workers: Option<usize>,
    /// Per-unit wait.
    pub wait: Duration,
    /// Draw progress bars on stderr.
    pub show_progress: bool,
}

impl BenchConfig {
    /// Override the per-unit wait.
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Override the thread and task counts.
    pub fn with_counts(mut self, thread_count: usize, task_count: usize) -> Self {
        self.thread_count = thread_count;
        self.task_count = task_count;
        self
    }

    /// Enable the chained runner with `chain_length` sequential units.
    pub fn with_chain(mut self, chain_length: usize) -> Self {
        self.chain_length = chain_length;
        self
    }

    /// Enable the pool runner with `workers` threads.
    pub fn with_pool(mut self, workers: usize) -> Self {
        self.pool_workers = Some(workers);
        self
    }

    /// Whether the chained runner takes part in this invocation.
    pub fn chain_enabled(&self) -> bool {
        self.chain_length > 0
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            thread_count: DEFAULT_THREAD_COUNT,
            task_count: DEFAULT_TASK_COUNT,
            chain_length: DEFAULT_CHAIN_LENGTH,
            pool_workers: None,
            wait: Duration::from_millis(DEFAULT_WAIT_MS),
            show_progress: false,
        }
    }
}
