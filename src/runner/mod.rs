//! Concurrency runners
//!
//! Each runner spawns a batch of worker units that wait for a fixed duration,
//! blocks (or suspends) until every unit has completed, and returns a
//! [`RunReport`] with the wall-clock time for the whole batch.
//!
//! # Components
//!
//! - [`threads`] - one OS thread per unit, joined at the end
//! - [`pool`] - a fixed number of OS threads pulling units from a shared queue
//! - [`coroutines`] - one tokio task per unit on a single-threaded scheduler
//! - [`chained`] - tokio tasks awaited one after another (sequential baseline)
//!
//! # Error Handling
//!
//! Runners return `Result<RunReport, RunnerError>`. Nothing is retried: a unit
//! that cannot be created or that panics makes the whole measurement invalid.

pub mod chained;
pub mod coroutines;
pub mod pool;
pub mod threads;

pub use chained::run_chained;
pub use coroutines::{current_thread_runtime, run_coroutines, run_on_current_thread};
pub use pool::run_pool;
pub use threads::run_threads;

use std::fmt;
use std::time::Duration;

/// Runner errors
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The OS refused to create a worker thread
    #[error("failed to spawn worker thread {index}: {source}")]
    Spawn {
        /// Position of the unit in the spawn loop
        index: usize,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Bookkeeping for the requested unit count could not be allocated
    #[error("cannot track {units} worker units: {source}")]
    Allocation {
        /// Units requested
        units: usize,
        /// Allocator error
        #[source]
        source: std::collections::TryReserveError,
    },

    /// A worker thread panicked before completing
    #[error("worker thread {index} panicked")]
    WorkerPanicked {
        /// Position of the unit in the spawn loop
        index: usize,
    },

    /// A cooperative task failed to join
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// The single-threaded scheduler could not be built
    #[error("failed to build runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The runner observed fewer completions than it spawned
    #[error("only {completed} of {expected} units completed")]
    Incomplete {
        /// Units spawned
        expected: usize,
        /// Units observed complete
        completed: usize,
    },
}

/// Concurrency model under measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcurrencyModel {
    /// Preemptive OS threads, one per unit
    Threads,
    /// Fixed-size pool of OS threads draining a shared queue
    Pool,
    /// Cooperative tasks on a single-threaded scheduler
    Coroutines,
    /// Cooperative tasks awaited strictly in sequence
    Chained,
}

impl ConcurrencyModel {
    /// Label used as the prefix of the elapsed-time line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Threads => "Threads",
            Self::Pool => "Pool",
            Self::Coroutines => "Coroutines",
            Self::Chained => "Chain",
        }
    }

    /// Lowercase key used for metric labels and log fields.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Threads => "threads",
            Self::Pool => "pool",
            Self::Coroutines => "coroutines",
            Self::Chained => "chained",
        }
    }
}

impl fmt::Display for ConcurrencyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reserve room for `units` join handles without aborting on overflow.
pub(crate) fn reserve_handles<T>(units: usize) -> Result<Vec<T>, RunnerError> {
    let mut handles = Vec::new();
    handles
        .try_reserve_exact(units)
        .map_err(|source| RunnerError::Allocation { units, source })?;
    Ok(handles)
}

/// Outcome of one runner invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Which runner produced this report
    pub model: ConcurrencyModel,
    /// Units spawned
    pub units: usize,
    /// Units observed complete
    pub completed: usize,
    /// Wall-clock time from first spawn to last completion
    pub elapsed: Duration,
}

impl RunReport {
    /// Build a report, failing if any spawned unit is unaccounted for.
    pub fn finish(
        model: ConcurrencyModel,
        units: usize,
        completed: usize,
        elapsed: Duration,
    ) -> Result<Self, RunnerError> {
        if completed != units {
            return Err(RunnerError::Incomplete {
                expected: units,
                completed,
            });
        }
        Ok(Self {
            model,
            units,
            completed,
            elapsed,
        })
    }

    /// Elapsed time in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Renders the user-facing result line, e.g. `Threads elapsed: 1.0123`.
impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elapsed: {}", self.model, self.elapsed_secs())
    }
}
