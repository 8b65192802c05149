//! Scoped wall-clock timing.
//!
//! A [`Stopwatch`] captures a monotonic timestamp when it is created and
//! reports the delta when stopped. It knows nothing about what it measures, so
//! the same helper times OS threads, cooperative tasks and chained tasks alike.

use std::future::Future;
use std::time::{Duration, Instant};

/// Monotonic stopwatch started on construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch now.
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Time elapsed so far without stopping.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Consume the stopwatch and return the total elapsed time.
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

/// Run `f` and return its result along with how long it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let stopwatch = Stopwatch::start();
    let value = f();
    (value, stopwatch.stop())
}

/// Await `future` and return its output along with how long it took.
///
/// The clock starts at the first poll, not when the future was built.
pub async fn measure_async<F: Future>(future: F) -> (F::Output, Duration) {
    let stopwatch = Stopwatch::start();
    let value = future.await;
    (value, stopwatch.stop())
}
