//! CLI integration tests for taskboard
//!
//! Tests the taskboard CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn taskboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    // Point config at an empty directory so host config never leaks in.
    cmd.env("TASKBOARD_CONFIG", "/nonexistent/taskboard-config.toml");
    cmd
}

fn entries_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}

#[test]
fn test_check_accepts_valid_input() {
    taskboard_cmd()
        .args([
            "check",
            "--title",
            "Build API",
            "--people",
            "3",
            "--description",
            "Implement REST endpoints",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input accepted"));
}

#[test]
fn test_check_rejects_invalid_input_with_exit_code() {
    taskboard_cmd()
        .args([
            "check",
            "--title",
            "",
            "--people",
            "10",
            "--description",
            "x",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid input, try again!"));
}

#[test]
fn test_check_json_format() {
    taskboard_cmd()
        .args([
            "check",
            "--format",
            "json",
            "--title",
            "T",
            "--people",
            "0",
            "--description",
            "Long enough text",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\":false"));
}

#[test]
fn test_board_renders_both_lists() {
    let file = entries_file(
        r#"[
            {"title": "Build API", "people": "3", "description": "Implement REST endpoints"},
            {"title": "Ship docs", "people": "2", "description": "Write the user guide"}
        ]"#,
    );

    taskboard_cmd()
        .args(["board", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTIVE PROJECTS"))
        .stdout(predicate::str::contains("FINISHED PROJECTS"))
        .stdout(predicate::str::contains("Build API (3 people)"))
        .stdout(predicate::str::contains("2 added, 0 rejected"));
}

#[test]
fn test_board_skips_invalid_entries() {
    let file = entries_file(
        r#"[
            {"title": "", "people": "10", "description": "x"},
            {"title": "Ship docs", "people": "2", "description": "Write the user guide"}
        ]"#,
    );

    taskboard_cmd()
        .args(["board", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 added, 1 rejected"))
        .stderr(predicate::str::contains("entry 0: Invalid input, try again!"));
}

#[test]
fn test_board_finished_list_is_empty_by_construction() {
    let file = entries_file(
        r#"[{"title": "T", "people": "1", "description": "Long enough text"}]"#,
    );

    taskboard_cmd()
        .args(["board", "--format", "json", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"finished\": []"));
}

#[test]
fn test_board_missing_input_file_fails() {
    taskboard_cmd()
        .args(["board", "--input", "/nonexistent/entries.json"])
        .assert()
        .failure();
}

#[test]
fn test_config_show_reports_defaults() {
    taskboard_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"description_min_length\": 5"));
}

#[test]
fn test_config_file_overrides_limits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[form]\npeople_max = 9.0\n").unwrap();

    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    cmd.env("TASKBOARD_CONFIG", &path)
        .args([
            "check",
            "--title",
            "T",
            "--people",
            "8",
            "--description",
            "Long enough text",
        ])
        .assert()
        .success();
}
