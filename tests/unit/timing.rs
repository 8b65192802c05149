//! Unit tests for the timing helpers

use std::time::Duration;

use concurrency_showdown::timing::{measure, Stopwatch};

#[test]
fn test_stopwatch_independent_of_model() {
    let stopwatch = Stopwatch::start();
    let handle = std::thread::spawn(|| std::thread::sleep(Duration::from_millis(20)));
    handle.join().unwrap();
    assert!(stopwatch.stop() >= Duration::from_millis(20));
}

#[test]
fn test_measure_empty_closure_is_near_zero() {
    let ((), elapsed) = measure(|| ());
    assert!(elapsed < Duration::from_millis(10));
}
