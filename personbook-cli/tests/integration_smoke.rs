//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("personbook").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("personbook").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("Keep records in memory"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("personbook").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL connection string"));
}

#[test]
fn test_serve_rejects_bad_port() {
    let mut cmd = Command::cargo_bin("personbook").unwrap();
    cmd.arg("serve").arg("--port").arg("not-a-port");

    cmd.assert().failure();
}

#[test]
fn test_serve_rejects_zero_timeout() {
    let mut cmd = Command::cargo_bin("personbook").unwrap();
    cmd.arg("serve").arg("--memory").arg("--timeout").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--timeout"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("personbook").unwrap();
    cmd.arg("frobnicate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
