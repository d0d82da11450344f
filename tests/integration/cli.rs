//! Binary smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("tabdeck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-browser"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_rejects_unknown_flag() {
    Command::cargo_bin("tabdeck")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure();
}
