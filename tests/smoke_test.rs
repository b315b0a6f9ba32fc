//! Smoke tests for the binshelf CLI.
//!
//! These tests verify basic CLI functionality:
//! - `binshelf --version` outputs version info
//! - `binshelf --help` outputs help text
//! - `binshelf platform` reports host identifiers without touching the registry

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

/// Get a Command for the binshelf binary.
fn binshelf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_binshelf"))
}

#[test]
fn test_version_flag() {
    binshelf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("binshelf"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    binshelf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn test_no_subcommand_fails() {
    binshelf().assert().failure();
}

#[test]
fn test_platform_json() {
    let env = TestEnv::new();
    let output = env.binshelf().arg("platform").output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["os"].as_array().unwrap().len(), 1);
    if cfg!(target_arch = "x86_64") {
        assert_eq!(json["arch"], serde_json::json!(["amd64", "x86_64"]));
    } else {
        assert_eq!(json["arch"].as_array().unwrap().len(), 1);
    }
    assert!(!env.config_path().exists());
}

#[test]
fn test_platform_human() {
    let env = TestEnv::new();
    env.binshelf()
        .args(["-H", "platform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("os: "))
        .stdout(predicate::str::contains("arch: "));
}
