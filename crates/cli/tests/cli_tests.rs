//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("excerpta").unwrap()
}

#[test]
fn test_cli_missing_url() {
    cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please provide a URL"));
}

#[test]
fn test_cli_invalid_url() {
    cmd()
        .arg("not-a-url")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to extract article"));
}

#[test]
fn test_cli_unsupported_scheme() {
    cmd()
        .arg("ftp://example.com/article")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_cli_unreachable_host() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["--timeout", "2", "http://127.0.0.1:9/article"])
        .assert()
        .failure()
        .code(1);

    // No partial output file on failure.
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_invalid_format_value() {
    cmd().args(["-f", "json", "https://example.com"]).assert().failure();
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("URL"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_cli_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("excerpta"));
}
