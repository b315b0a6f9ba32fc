//! The binary registry.
//!
//! ## config.json - managed binaries
//!
//! Located at `~/.bin/config.json`. Contains:
//! - `default_path` - directory used for installs when none is given
//! - `bins` - one entry per managed binary, keyed by its absolute path
//!
//! The file is created empty on first use. If no default path has been
//! stored, it is resolved from `PATH` on every load (see [`resolver`]).
//!
//! ## Concurrency
//!
//! There is no locking. Two processes writing the registry at the same time
//! can lose each other's updates. Writes replace the file atomically, so a
//! reader never sees a half-written document.

pub mod resolver;
pub mod schema;
pub mod store;

pub use resolver::{SEARCH_PATH_ENV, resolve_default_path};
pub use schema::{BinaryRecord, ConfigRecord};
pub use store::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigStore, config_path};
