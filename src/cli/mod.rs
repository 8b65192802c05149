//! Command-line interface

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::config::{
    BenchConfig, DEFAULT_CHAIN_LENGTH, DEFAULT_TASK_COUNT, DEFAULT_THREAD_COUNT, DEFAULT_WAIT_MS,
    MAX_POOL_WORKERS, MAX_WAIT_MS,
};

/// Parse and validate the pool size
fn parse_pool_workers(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value == 0 {
        return Err("pool needs at least 1 worker".to_string());
    }
    if value > MAX_POOL_WORKERS {
        return Err(format!(
            "pool size {value} exceeds maximum of {MAX_POOL_WORKERS}"
        ));
    }
    Ok(value)
}

/// Concurrency showdown CLI
///
/// With no arguments, runs 10,000 blocking threads and then 100,000
/// cooperative tasks, each waiting one second, and prints both elapsed times.
#[derive(Parser, Debug)]
#[command(name = "concurrency-showdown")]
#[command(about = "Compare thread-per-task blocking with single-threaded cooperative tasks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of OS threads for the thread-based runner
    #[arg(long = "threads", default_value_t = DEFAULT_THREAD_COUNT)]
    pub thread_count: usize,

    /// Number of tasks for the cooperative runner
    #[arg(long = "tasks", default_value_t = DEFAULT_TASK_COUNT)]
    pub task_count: usize,

    /// Per-unit wait in milliseconds (max: 60000)
    #[arg(long, default_value_t = DEFAULT_WAIT_MS, value_parser = clap::value_parser!(u64).range(0..=MAX_WAIT_MS))]
    pub wait_ms: u64,

    /// Also run N tasks one after another as a sequential baseline (0 disables)
    #[arg(long = "chain", default_value_t = DEFAULT_CHAIN_LENGTH)]
    pub chain_length: usize,

    /// Also run the thread workload on a fixed pool of N worker threads
    #[arg(long, value_parser = parse_pool_workers)]
    pub pool_workers: Option<usize>,

    /// Show progress bars on stderr
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Serve Prometheus metrics on this address (e.g. 127.0.0.1:9090)
    #[arg(long)]
    pub metrics_addr: Option<SocketAddr>,
}

impl Cli {
    /// Resolve parsed flags into a [`BenchConfig`].
    pub fn to_config(&self) -> BenchConfig {
        BenchConfig {
            thread_count: self.thread_count,
            task_count: self.task_count,
            chain_length: self.chain_length,
            pool_workers: self.pool_workers,
            wait: Duration::from_millis(self.wait_ms),
            show_progress: self.progress,
        }
    }
}
