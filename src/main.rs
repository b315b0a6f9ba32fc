//! binshelf CLI - Keep track of locally installed binaries.

use binshelf::cli::{Cli, Commands};
use binshelf::commands::{self, Output};
use binshelf::config::{ConfigStore, SEARCH_PATH_ENV};
use binshelf::{BinaryRecord, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let human = cli.human_readable;
    let config_path = cli.config_path;

    match cli.command {
        Commands::List => {
            let store = open_store(config_path)?;
            output(&commands::list(&store), human);
        }
        Commands::DefaultPath => {
            let store = open_store(config_path)?;
            output(&commands::default_path(&store), human);
        }
        Commands::Add {
            path,
            remote_name,
            version,
            hash,
            url,
        } => {
            let mut store = open_store(config_path)?;
            let record = BinaryRecord {
                path,
                remote_name,
                version,
                hash,
                url,
            };
            output(&commands::add(&mut store, record)?, human);
        }
        Commands::Remove { paths } => {
            let mut store = open_store(config_path)?;
            output(&commands::remove(&mut store, &paths)?, human);
        }
        // Platform info needs no registry
        Commands::Platform => output(&commands::platform(), human),
    }

    Ok(())
}

/// Load the registry from `--config` when given, otherwise from `~/.bin/config.json`.
fn open_store(config_path: Option<PathBuf>) -> Result<ConfigStore> {
    match config_path {
        Some(path) => {
            let search_path = env::var_os(SEARCH_PATH_ENV).unwrap_or_default();
            ConfigStore::load_from(&path, search_path)
        }
        None => ConfigStore::load(),
    }
}

fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
