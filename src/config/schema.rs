//! JSON schema for the binary registry file.
//!
//! The registry lives at `~/.bin/config.json`:
//!
//! ```json
//! {
//!   "default_path": "/usr/local/bin",
//!   "bins": {
//!     "/usr/local/bin/jq": {
//!       "path": "/usr/local/bin/jq",
//!       "remote_name": "jq-linux64",
//!       "version": "1.7.1",
//!       "hash": "5942c9b0934e510ee61eb3e30273f1b3fe2590df93933a93d7c58b81d19c8ff5",
//!       "url": "https://github.com/jqlang/jq/releases/tag/jq-1.7.1"
//!     }
//!   }
//! }
//! ```
//!
//! Every field is optional on read and comes back as an empty string (or an
//! empty map) when absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// Metadata for one managed binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinaryRecord {
    /// Absolute location of the binary on disk. Unique key of the registry.
    pub path: String,

    /// Name of the asset at its source
    pub remote_name: String,

    /// Free-form version tag
    pub version: String,

    /// Content hash of the installed file
    pub hash: String,

    /// Download origin
    pub url: String,
}

impl BinaryRecord {
    /// Create a record with only the path set.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the remote name.
    pub fn with_remote_name(mut self, remote_name: impl Into<String>) -> Self {
        self.remote_name = remote_name.into();
        self
    }

    /// Set the version tag.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the content hash.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Set the download URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Root object of the registry file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    /// Directory used for installs when the caller names none. Empty until resolved.
    pub default_path: String,

    /// Managed binaries keyed by their path
    #[serde(deserialize_with = "null_as_empty")]
    pub bins: BTreeMap<String, BinaryRecord>,
}

impl ConfigRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from the registry file contents.
    ///
    /// Blank contents are a first run and yield an empty record.
    pub fn from_json(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_json::from_str(contents)?)
    }

    /// Serialize the record the way it is written to disk.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Insert or replace the entry keyed by `record.path`.
    ///
    /// Returns the record that was replaced, if any. Only touches memory.
    pub fn upsert_binary(&mut self, record: BinaryRecord) -> Result<Option<BinaryRecord>> {
        if record.path.is_empty() {
            return Err(Error::InvalidInput("binary path must not be empty".to_string()));
        }
        Ok(self.bins.insert(record.path.clone(), record))
    }

    /// Remove every listed path from the registry. Unknown paths are ignored.
    ///
    /// Returns the records that were actually removed. Only touches memory.
    pub fn remove_binaries<I, S>(&mut self, paths: I) -> Vec<BinaryRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .filter_map(|p| self.bins.remove(p.as_ref()))
            .collect()
    }

    /// Look up a binary by its path.
    pub fn binary(&self, path: &str) -> Option<&BinaryRecord> {
        self.bins.get(path)
    }
}

/// A `null` bins map reads as an empty map.
fn null_as_empty<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, BinaryRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let bins = Option::<BTreeMap<String, BinaryRecord>>::deserialize(deserializer)?;
    Ok(bins.unwrap_or_default())
}
