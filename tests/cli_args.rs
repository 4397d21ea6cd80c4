//! Integration tests for CLI argument handling
//!
//! Exercises the binary's argument surface and the validation that runs
//! before any network or cache I/O, so none of these tests touch the network.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_aniday"))
        .args(args)
        .output()
        .expect("Failed to execute aniday")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("aniday"), "Help should mention aniday");
    assert!(stdout.contains("--day"), "Help should mention --day flag");
    assert!(stdout.contains("--month"), "Help should mention --month flag");
}

#[test]
fn test_day_too_large_prints_invalid_argument_error() {
    let output = run_cli(&["--day", "42"]);
    assert!(!output.status.success(), "Expected day 42 to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("InvalidArgumentError"),
        "Should report an InvalidArgumentError: {}",
        stderr
    );
    assert!(stderr.contains("1-31"), "Should name the valid range");
}

#[test]
fn test_day_zero_is_rejected() {
    let output = run_cli(&["-d", "0"]);
    assert!(!output.status.success(), "Expected day 0 to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidArgumentError"));
}

#[test]
fn test_month_thirteen_is_rejected() {
    let output = run_cli(&["--month", "13"]);
    assert!(!output.status.success(), "Expected month 13 to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidArgumentError"));
    assert!(stderr.contains("1-12"), "Should name the valid range");
}

#[test]
fn test_month_zero_is_rejected() {
    let output = run_cli(&["-m", "0"]);
    assert!(!output.status.success(), "Expected month 0 to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidArgumentError"));
}

#[test]
fn test_non_numeric_day_is_rejected_by_parser() {
    let output = run_cli(&["--day", "soon"]);
    assert!(!output.status.success(), "Expected non-numeric day to fail");
}
