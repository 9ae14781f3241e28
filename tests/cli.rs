//! End-to-end tests for the headless command line interface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_mentions_the_calculator() {
    Command::cargo_bin("ordinate")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphing calculator"));
}

#[test]
fn headless_export_writes_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("graph.png");

    Command::cargo_bin("ordinate")
        .unwrap()
        .args(["x^2", "sin(x)", "--export"])
        .arg(&out)
        .args(["--width", "400", "--height", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']), "PNG magic bytes");
}

#[test]
fn invalid_expressions_still_export() {
    // Expression errors are never fatal; the bad entry is just not drawn.
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("graph.png");

    Command::cargo_bin("ordinate")
        .unwrap()
        .args(["x +", "--export"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn export_to_bad_path_fails() {
    Command::cargo_bin("ordinate")
        .unwrap()
        .args(["x", "--export", "/nonexistent-dir/graph.png"])
        .assert()
        .failure();
}
