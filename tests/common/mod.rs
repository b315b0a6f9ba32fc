//! Common test utilities for binshelf integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch the
//! user's real `~/.bin/config.json`.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated home directory.
///
/// - `home_dir`: stands in for `$HOME`, so the registry lands in `home_dir/.bin/config.json`
/// - `bin_dir`: a world-writable directory used as the only `PATH` entry
///
/// The `binshelf()` method sets `HOME` and `PATH` per-invocation, making tests
/// parallel-safe.
pub struct TestEnv {
    pub home_dir: TempDir,
    pub bin_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        let home_dir = TempDir::new().unwrap();
        let bin_dir = home_dir.path().join("shared-bin");
        fs::create_dir(&bin_dir).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&bin_dir, fs::Permissions::from_mode(0o777)).unwrap();
        }
        Self { home_dir, bin_dir }
    }

    /// Get a Command for the binshelf binary with isolated HOME and PATH.
    pub fn binshelf(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_binshelf"));
        cmd.env("HOME", self.home_dir.path());
        cmd.env("PATH", &self.bin_dir);
        cmd.env_remove("BINSHELF_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Get the path to the isolated home directory.
    pub fn home_path(&self) -> &Path {
        self.home_dir.path()
    }

    /// Get the path where the registry file is expected.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir.path().join(".bin").join("config.json")
    }

    /// Parse the registry file as JSON.
    pub fn read_config(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.config_path()).unwrap();
        serde_json::from_str(&contents).unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
