//! binshelf - A registry of locally managed binaries.
//!
//! This library keeps track of binaries installed outside a package manager:
//! where each one lives, where it came from, and which version and hash were
//! installed. It also picks a default install directory from `PATH` and
//! reports the host's platform identifiers for matching release assets.

pub mod cli;
pub mod commands;
pub mod config;
pub mod sys;

pub use config::{BinaryRecord, ConfigRecord, ConfigStore};

/// Library-level error type for binshelf operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    HomeDirNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for binshelf operations.
pub type Result<T> = std::result::Result<T, Error>;
