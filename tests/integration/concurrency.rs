//! Integration tests for the concurrency runners

use std::time::Duration;

use concurrency_showdown::runner::{
    run_chained, run_coroutines, run_on_current_thread, run_pool, run_threads,
};
use concurrency_showdown::ConcurrencyModel;

const WAIT: Duration = Duration::from_millis(100);

/// 10 threads waiting 100ms finish in ~0.1s, not ~1.0s
#[test]
fn test_threads_scenario_ten_units() {
    let report = run_threads(10, WAIT).unwrap();

    assert_eq!(report.completed, 10);
    assert!(report.elapsed >= WAIT);
    assert!(
        report.elapsed < Duration::from_millis(500),
        "expected ~0.1s, got {:?}",
        report.elapsed
    );
}

/// 10 tasks waiting 100ms finish in ~0.1s, not ~1.0s
#[test]
fn test_coroutines_scenario_ten_units() {
    let report = run_on_current_thread(run_coroutines(10, WAIT)).unwrap();

    assert_eq!(report.completed, 10);
    assert!(report.elapsed >= WAIT);
    assert!(
        report.elapsed < Duration::from_millis(500),
        "expected ~0.1s, got {:?}",
        report.elapsed
    );
}

#[test]
fn test_zero_units_execute_nothing() {
    let threads = run_threads(0, Duration::from_secs(30)).unwrap();
    let tasks = run_on_current_thread(run_coroutines(0, Duration::from_secs(30))).unwrap();

    for report in [threads, tasks] {
        assert_eq!(report.units, 0);
        assert_eq!(report.completed, 0);
        assert!(report.elapsed < Duration::from_millis(100));
    }
}

/// Ten times the units on one thread should not cost more than a small
/// constant factor over the thread runner.
#[test]
fn test_coroutines_scale_past_threads() {
    let threads = run_threads(200, WAIT).unwrap();
    let tasks = run_on_current_thread(run_coroutines(2_000, WAIT)).unwrap();

    assert_eq!(threads.completed, 200);
    assert_eq!(tasks.completed, 2_000);
    assert!(
        tasks.elapsed <= threads.elapsed * 3,
        "coroutines {:?} vs threads {:?}",
        tasks.elapsed,
        threads.elapsed
    );
}

#[test]
fn test_chain_is_sequential_baseline() {
    let wait = Duration::from_millis(20);
    let concurrent = run_on_current_thread(run_coroutines(5, wait)).unwrap();
    let chained = run_on_current_thread(run_chained(5, wait)).unwrap();

    assert_eq!(chained.model, ConcurrencyModel::Chained);
    assert!(chained.elapsed >= wait * 5);
    assert!(chained.elapsed > concurrent.elapsed);
}

/// 4 units on 2 pooled workers at 50ms need two rounds (~100ms)
#[test]
fn test_bounded_pool_runs_in_rounds() {
    let wait = Duration::from_millis(50);
    let report = run_pool(4, 2, wait).unwrap();

    assert_eq!(report.model, ConcurrencyModel::Pool);
    assert_eq!(report.completed, 4);
    assert!(report.elapsed >= wait * 2);
    assert!(
        report.elapsed < wait * 4,
        "expected ~100ms, got {:?}",
        report.elapsed
    );
}
