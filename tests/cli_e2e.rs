//! Command-line behaviour that never reaches the full-screen editor.

use assert_cmd::Command;
use predicates::prelude::*;

fn glyphgen() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("glyphgen"))
}

#[test]
fn test_help_prints_usage_and_succeeds() {
    glyphgen()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--cols"))
        .stdout(predicate::str::contains("--rows"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_version_flag() {
    glyphgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glyphgen"));
}

#[test]
fn test_unknown_flag_reports_and_exits_cleanly() {
    glyphgen()
        .arg("-x")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("unexpected argument"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Glyph (").not());
}

#[test]
fn test_usage_after_error_ends_with_single_newline() {
    let output = glyphgen().arg("-x").output().expect("runs");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with('\n'), "stdout was: {:?}", stdout);
    assert!(!stdout.ends_with("\n\n"), "stdout was: {:?}", stdout);
}

#[test]
fn test_missing_argument_reports_and_exits_cleanly() {
    glyphgen()
        .arg("-c")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("value is required"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_format_reports_and_exits_cleanly() {
    glyphgen()
        .args(["-f", "x"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("invalid value"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_diagnostic_is_one_line() {
    let output = glyphgen().arg("--bogus").output().expect("runs");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr was: {}", stderr);
}
