//! Loading and persisting the binary registry.
//!
//! A [`ConfigStore`] binds a [`ConfigRecord`] to the file it came from. It is
//! built once per process and handed to whatever needs the registry. The
//! mutating methods update memory first and then flush the full record.
//! When a flush fails, memory is ahead of disk and [`ConfigStore::flush`] can
//! be retried on its own.

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::resolver::{SEARCH_PATH_ENV, resolve_default_path};
use crate::config::schema::{BinaryRecord, ConfigRecord};
use crate::{Error, Result};

/// Directory under the home directory that holds the registry.
pub const CONFIG_DIR_NAME: &str = ".bin";

/// File name of the registry.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default location of the registry: `~/.bin/config.json`.
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
    Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// The registry record together with the file that backs it.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    record: ConfigRecord,
}

impl ConfigStore {
    /// Load the registry from `~/.bin/config.json`, seeding the default path from `PATH`.
    pub fn load() -> Result<Self> {
        let search_path = std::env::var_os(SEARCH_PATH_ENV).unwrap_or_default();
        Self::load_from(&config_path()?, search_path)
    }

    /// Load the registry from `path`, creating the file if it doesn't exist.
    ///
    /// An empty file is a first run and yields an empty registry. If the
    /// loaded record has no default path, one is resolved from `search_path`.
    pub fn load_from(path: &Path, search_path: impl AsRef<OsStr>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let mut record = ConfigRecord::from_json(&contents)?;

        if record.default_path.is_empty() {
            if let Some(dir) = resolve_default_path(search_path) {
                record.default_path = dir.to_string_lossy().into_owned();
            }
        }
        tracing::debug!(default_path = %record.default_path, "download path set");

        Ok(Self {
            path: path.to_path_buf(),
            record,
        })
    }

    /// Wrap an existing record without touching the filesystem.
    pub fn with_record(path: impl Into<PathBuf>, record: ConfigRecord) -> Self {
        Self {
            path: path.into(),
            record,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read access to the in-memory registry.
    pub fn get(&self) -> &ConfigRecord {
        &self.record
    }

    /// Insert or replace a binary, then persist the registry.
    pub fn upsert_binary(&mut self, record: BinaryRecord) -> Result<()> {
        self.record.upsert_binary(record)?;
        self.flush()
    }

    /// Remove the given paths from the registry, then persist it once.
    ///
    /// Paths that aren't registered are ignored. Returns the records that
    /// were removed, each at most once.
    pub fn remove_binaries<I, S>(&mut self, paths: I) -> Result<Vec<BinaryRecord>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed = self.record.remove_binaries(paths);
        tracing::debug!(count = removed.len(), "removed binaries");
        self.flush()?;
        Ok(removed)
    }

    /// Write the full registry to disk.
    ///
    /// The content goes to a temporary file next to the target, which then
    /// replaces the target in one rename. A symlinked registry is followed, so
    /// the link stays in place and its destination is replaced. The existing
    /// file's permissions carry over to the new one; a file that doesn't
    /// exist yet gets the temporary file's owner-only mode.
    pub fn flush(&self) -> Result<()> {
        let contents = self.record.to_json()?;

        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| Error::Io(e.error))?;

        tracing::debug!(
            path = %target.display(),
            bins = self.record.bins.len(),
            "registry flushed"
        );
        Ok(())
    }
}
