// tests/cli_tests.rs
//
// End-to-end checks for the `tantra` binary: verdicts on stdout,
// diagnostics on stderr, and the process exit code.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_check_accepts_valid_document_from_stdin() {
    let mut cmd = Command::cargo_bin("tantra").expect("binary should build");
    cmd.arg("check").write_stdin(r#"{"ok": true}"#);
    cmd.assert()
        .success()
        .stdout(contains("valid").and(contains("Object")));
}

#[test]
fn test_check_reports_diagnostic_code_on_malformed_file() {
    let bad_file = "tests/bad_document.json";
    fs::write(bad_file, r#"{"x":}"#).expect("should write fixture");

    let mut cmd = Command::cargo_bin("tantra").expect("binary should build");
    cmd.arg("check").arg(bad_file);
    cmd.assert()
        .failure()
        .stderr(contains("tantra::json::malformed").or(contains("not a valid JSON document")));

    let _ = fs::remove_file(bad_file);
}

#[test]
fn test_check_flags_trailing_text_after_the_document() {
    let mut cmd = Command::cargo_bin("tantra").expect("binary should build");
    cmd.arg("check").write_stdin("null null");
    cmd.assert().failure().stderr(contains("trailing"));
}

#[test]
fn test_format_renders_compact_output() {
    let mut cmd = Command::cargo_bin("tantra").expect("binary should build");
    cmd.arg("format").arg("--compact").write_stdin("[ 1 ,  2 ]");
    cmd.assert().success().stdout(contains("[1,2]"));
}

#[test]
fn test_format_pretty_prints_nested_documents() {
    let mut cmd = Command::cargo_bin("tantra").expect("binary should build");
    cmd.arg("format").write_stdin(r#"{"a":[1,2]}"#);
    cmd.assert()
        .success()
        .stdout(contains("\"a\": [").and(contains("  1,")));
}

#[test]
fn test_format_reads_files_too() {
    let good_file = "tests/good_document.json";
    fs::write(good_file, "[true, null]").expect("should write fixture");

    let mut cmd = Command::cargo_bin("tantra").expect("binary should build");
    cmd.arg("format").arg("--compact").arg(good_file);
    cmd.assert().success().stdout(contains("[true,null]"));

    let _ = fs::remove_file(good_file);
}
