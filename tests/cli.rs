use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("world-explorer").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn export_help_lists_out_dir() {
    let mut cmd = Command::cargo_bin("world-explorer").unwrap();
    cmd.args(["export", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--delay-ms"));
}

#[test]
fn search_rejects_unknown_mode() {
    let mut cmd = Command::cargo_bin("world-explorer").unwrap();
    cmd.args(["search", "france", "--mode", "continent"]);
    cmd.assert().failure();
}

#[test]
fn web_cli_shows_help() {
    let mut cmd = Command::cargo_bin("world-explorer-web").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--port"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn search_online_by_name() {
    let mut cmd = Command::cargo_bin("world-explorer").unwrap();
    cmd.args(["search", "france", "--mode", "name"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("France"));
}
