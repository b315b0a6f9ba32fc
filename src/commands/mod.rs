//! Command implementations for the binshelf CLI.
//!
//! Each command takes the registry it operates on and returns a result that
//! can be rendered as JSON or as human-readable text.

use serde::Serialize;

use crate::Result;
use crate::config::{BinaryRecord, ConfigStore};
use crate::sys;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json_of<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
}

// === list ===

#[derive(Serialize)]
pub struct ListResult {
    pub count: usize,
    pub bins: Vec<BinaryRecord>,
}

impl Output for ListResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        if self.bins.is_empty() {
            return "No binaries registered.".to_string();
        }
        let mut lines = vec![format!("{} binaries registered:", self.count)];
        for bin in &self.bins {
            let version = if bin.version.is_empty() { "-" } else { bin.version.as_str() };
            lines.push(format!("  {} {}", bin.path, version));
            if !bin.url.is_empty() {
                lines.push(format!("    url: {}", bin.url));
            }
        }
        lines.join("\n")
    }
}

/// List every registered binary, ordered by path.
pub fn list(store: &ConfigStore) -> ListResult {
    let bins: Vec<BinaryRecord> = store.get().bins.values().cloned().collect();
    ListResult {
        count: bins.len(),
        bins,
    }
}

// === default-path ===

#[derive(Serialize)]
pub struct DefaultPathResult {
    pub default_path: String,
}

impl Output for DefaultPathResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        if self.default_path.is_empty() {
            "No writable directory found in PATH.".to_string()
        } else {
            self.default_path.clone()
        }
    }
}

/// Report the directory installs go to by default.
pub fn default_path(store: &ConfigStore) -> DefaultPathResult {
    DefaultPathResult {
        default_path: store.get().default_path.clone(),
    }
}

// === add ===

#[derive(Serialize)]
pub struct AddResult {
    pub path: String,
    pub replaced: bool,
}

impl Output for AddResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        if self.replaced {
            format!("Updated {}", self.path)
        } else {
            format!("Added {}", self.path)
        }
    }
}

/// Record a binary in the registry and persist it.
pub fn add(store: &mut ConfigStore, record: BinaryRecord) -> Result<AddResult> {
    let path = record.path.clone();
    let replaced = store.get().binary(&path).is_some();
    store.upsert_binary(record)?;
    Ok(AddResult { path, replaced })
}

// === remove ===

#[derive(Serialize)]
pub struct RemoveResult {
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
}

impl Output for RemoveResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        let mut lines = Vec::new();
        for path in &self.removed {
            lines.push(format!("Removed {}", path));
        }
        for path in &self.not_found {
            lines.push(format!("Not registered: {}", path));
        }
        if lines.is_empty() {
            lines.push("Nothing to remove.".to_string());
        }
        lines.join("\n")
    }
}

/// Drop the given paths from the registry and persist it.
///
/// Each path is reported once, however often it was given.
pub fn remove(store: &mut ConfigStore, paths: &[String]) -> Result<RemoveResult> {
    let removed: Vec<String> = store
        .remove_binaries(paths)?
        .into_iter()
        .map(|bin| bin.path)
        .collect();

    let mut not_found: Vec<String> = Vec::new();
    for path in paths {
        if !removed.contains(path) && !not_found.contains(path) {
            not_found.push(path.clone());
        }
    }

    Ok(RemoveResult { removed, not_found })
}

// === platform ===

#[derive(Serialize)]
pub struct PlatformResult {
    pub os: Vec<String>,
    pub arch: Vec<String>,
}

impl Output for PlatformResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        format!("os: {}\narch: {}", self.os.join(", "), self.arch.join(", "))
    }
}

/// Report the host's OS and architecture identifiers.
pub fn platform() -> PlatformResult {
    PlatformResult {
        os: sys::current_os(),
        arch: sys::current_architectures(),
    }
}
