//! # Concurrency Showdown
//!
//! Measures how long it takes to run a large batch of trivially waiting units
//! of work under two concurrency models:
//!
//! - **Threads**: one preemptively scheduled OS thread per unit, each blocking
//!   in `std::thread::sleep`, joined at the end.
//! - **Coroutines**: one tokio task per unit on a single-threaded
//!   (`current_thread`) scheduler, each suspending in `tokio::time::sleep`.
//!
//! Both batches finish in roughly one wait interval, but the cooperative
//! runner handles ten times as many units on a single OS thread.
//!
//! ## Quick Start
//!
//! ```no_run
//! use concurrency_showdown::{config::BenchConfig, driver::run_benchmarks};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BenchConfig::default();
//! let mut stdout = std::io::stdout();
//! let reports = run_benchmarks(&config, &mut stdout)?;
//! assert_eq!(reports.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`runner`] - the thread, pool, coroutine and chained runners
//! - [`driver`] - runs the runners in order and prints one line each
//! - [`timing`] - scoped monotonic stopwatch
//! - [`config`] - default counts and wait duration
//! - [`cli`] - flag parsing
//! - [`metrics`] - optional Prometheus metrics
//! - [`progress`] - optional progress bars

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Command-line interface
pub mod cli;

/// Default constants and resolved configuration
pub mod config;

/// Sequential benchmark driver
pub mod driver;

/// Runner metrics
pub mod metrics;

/// Progress display
pub mod progress;

/// Concurrency runners
pub mod runner;

/// Wall-clock timing helpers
pub mod timing;

pub use config::BenchConfig;
pub use driver::{run_benchmarks, BenchError};
pub use runner::{ConcurrencyModel, RunReport, RunnerError};
