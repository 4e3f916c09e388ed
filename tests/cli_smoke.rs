//! End-to-end tests for the `devcli` binary.

use std::collections::HashSet;

use assert_cmd::Command;
use predicates::prelude::*;

fn devcli() -> Command {
    let mut cmd = Command::cargo_bin("devcli").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn body_lines(stdout: &str) -> HashSet<String> {
    let start = stdout.find(">>>\n").unwrap() + 4;
    let end = stdout.rfind("<<<").unwrap();
    stdout[start..end].lines().map(str::to_string).collect()
}

#[test]
fn dedup_prints_counts_and_unique_lines() {
    let output = devcli().args(["dedup", "a\nb\na"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();

    assert!(stdout.starts_with("\nRow count changed after deduplication:\n  3 -> 2\n>>>\n"));
    assert!(stdout.ends_with("<<<\n"));
    assert_eq!(
        body_lines(&stdout),
        HashSet::from(["a".to_string(), "b".to_string()])
    );
}

#[test]
fn dedup_identical_lines() {
    devcli()
        .args(["dedup", "x\nx\nx"])
        .assert()
        .success()
        .stdout("\nRow count changed after deduplication:\n  3 -> 1\n>>>\nx\n<<<\n");
}

#[test]
fn dedup_empty_text() {
    devcli()
        .args(["dedup", ""])
        .assert()
        .success()
        .stdout("\nRow count changed after deduplication:\n  0 -> 0\n>>>\n<<<\n");
}

#[test]
fn dedup_lone_hyphen_is_text() {
    devcli()
        .args(["dedup", "-"])
        .write_stdin("ignored\nignored\n")
        .assert()
        .success()
        .stdout("\nRow count changed after deduplication:\n  1 -> 1\n>>>\n-\n<<<\n");
}

#[test]
fn dedup_double_dash_passes_flag_like_text() {
    devcli()
        .args(["dedup", "--", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1 -> 1\n>>>\n-v\n<<<"));
}

#[test]
fn help_mentions_double_dash() {
    devcli()
        .args(["dedup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`--`"));
}

#[test]
fn dedup_accepts_leading_hyphen_text() {
    devcli()
        .args(["dedup", "--flag\n--flag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  2 -> 1"))
        .stdout(predicate::str::contains(">>>\n--flag\n<<<"));
}

#[test]
fn no_color_when_piped() {
    devcli()
        .args(["dedup", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn dedup_requires_value() {
    devcli()
        .arg("dedup")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<value>"));
}

#[test]
fn help_lists_dedup_with_platforms() {
    devcli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deduplicate lines of multi-line text (Windows/Linux/MacOS)",
        ));
}

#[test]
fn unknown_subcommand_fails() {
    devcli().arg("nope").assert().failure().code(2);
}
