//! Integration tests for top-level CLI behavior

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("classbook")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("table"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("describe"))
        .stdout(predicate::str::contains("levels"));
}

#[test]
fn test_version() {
    Command::cargo_bin("classbook")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_levels_single() {
    Command::cargo_bin("classbook")
        .unwrap()
        .args(["levels", "3"])
        .assert()
        .success()
        .stdout("3rd level\n");
}

#[test]
fn test_levels_many() {
    Command::cargo_bin("classbook")
        .unwrap()
        .args(["levels", "1", "5", "11", "20"])
        .assert()
        .success()
        .stdout("1st level and again at 5th, 11th, and 20th level\n");
}

#[test]
fn test_levels_requires_an_argument() {
    Command::cargo_bin("classbook")
        .unwrap()
        .arg("levels")
        .assert()
        .failure();
}

#[test]
fn test_missing_config_is_an_error() {
    Command::cargo_bin("classbook")
        .unwrap()
        .args([
            "--config",
            "does-not-exist.toml",
            "table",
            "--features",
            "bundle.json",
            "--class",
            "fighter",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config file not found"));
}
