//! Tests for CLI argument parsing against the built binary.

use std::process::Command;
use tempfile::TempDir;

fn counter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counter-app"))
}

#[test]
fn test_help_shows_bound_options() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--min"));
    assert!(stdout.contains("--max"));
    assert!(stdout.contains("Initial counter value"));
}

#[test]
fn test_check_prints_merged_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = counter_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .args(["--min", "15", "--max", "25", "--value", "18", "--check"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("min = 15"));
    assert!(stdout.contains("max = 25"));
    assert!(stdout.contains("initial = 18"));
}

#[test]
fn test_inverted_bounds_exit_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = counter_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .args(["--min", "10", "--max", "0", "--check"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("min (10) must not exceed max (0)"));
}
