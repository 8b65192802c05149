//! End-to-end tests for the concurrency-showdown binary

use assert_cmd::Command;

fn parse_elapsed(line: &str, label: &str) -> f64 {
    let prefix = format!("{label} elapsed: ");
    let value = line
        .strip_prefix(&prefix)
        .unwrap_or_else(|| panic!("line {line:?} does not start with {prefix:?}"));
    value.parse().unwrap()
}

#[test]
fn test_prints_two_lines_in_order() {
    let output = Command::cargo_bin("concurrency-showdown")
        .unwrap()
        .args(["--threads", "10", "--tasks", "100", "--wait-ms", "50"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout was {stdout:?}");

    let threads = parse_elapsed(lines[0], "Threads");
    let coroutines = parse_elapsed(lines[1], "Coroutines");
    assert!(threads >= 0.05 && threads < 1.0);
    assert!(coroutines >= 0.05 && coroutines < 1.0);
}

#[test]
fn test_chain_flag_adds_line() {
    let output = Command::cargo_bin("concurrency-showdown")
        .unwrap()
        .args([
            "--threads", "2", "--tasks", "2", "--wait-ms", "10", "--chain", "3",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(parse_elapsed(lines[2], "Chain") >= 0.03);
}

#[test]
fn test_pool_flag_adds_line_after_defaults() {
    let output = Command::cargo_bin("concurrency-showdown")
        .unwrap()
        .args([
            "--threads", "4", "--tasks", "4", "--wait-ms", "50", "--pool-workers", "2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "stdout was {stdout:?}");
    parse_elapsed(lines[0], "Threads");
    parse_elapsed(lines[1], "Coroutines");
    assert!(parse_elapsed(lines[2], "Pool") >= 0.1);
}

#[test]
fn test_oversized_thread_count_fails_cleanly() {
    let output = Command::cargo_bin("concurrency-showdown")
        .unwrap()
        .args([
            "--threads",
            &usize::MAX.to_string(),
            "--tasks",
            "0",
            "--wait-ms",
            "0",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("panicked"), "stderr was {stderr:?}");
    assert!(stderr.contains("Benchmark failed"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = Command::cargo_bin("concurrency-showdown")
        .unwrap()
        .env("RUST_LOG", "concurrency_showdown=debug")
        .args(["--threads", "1", "--tasks", "1", "--wait-ms", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Runner completed"));
}

#[test]
fn test_rejects_invalid_wait() {
    Command::cargo_bin("concurrency-showdown")
        .unwrap()
        .args(["--wait-ms", "not-a-number"])
        .assert()
        .failure();
}
