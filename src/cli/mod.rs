//! CLI argument definitions for binshelf.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// binshelf - Keep track of locally installed binaries.
#[derive(Parser, Debug)]
#[command(name = "binshelf")]
#[command(author, version, about = "Keep track of locally installed binaries", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Registry file to use instead of ~/.bin/config.json
    #[arg(long = "config", global = true, env = "BINSHELF_CONFIG")]
    pub config_path: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered binaries
    List,

    /// Show the default install directory
    DefaultPath,

    /// Register a binary, replacing any entry with the same path
    Add {
        /// Absolute path of the installed binary
        #[arg(long)]
        path: String,

        /// Asset name at the download source
        #[arg(long, default_value = "")]
        remote_name: String,

        /// Version tag
        #[arg(long = "bin-version", default_value = "")]
        version: String,

        /// Content hash of the installed file
        #[arg(long, default_value = "")]
        hash: String,

        /// Download URL
        #[arg(long, default_value = "")]
        url: String,
    },

    /// Forget one or more binaries
    Remove {
        /// Paths of the binaries to forget
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Show OS and architecture identifiers for this host
    Platform,
}
