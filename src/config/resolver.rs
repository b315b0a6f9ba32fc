//! Default install directory resolution.
//!
//! The default directory is the first entry of a colon-separated search path
//! (normally `PATH`) that exists, is a directory, and is world-writable.
//! Only the "other" write bit is consulted. Owner and group bits, ACLs and
//! the identity of the caller are not, so the result is the same for every
//! user on the machine.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable scanned for the default install directory.
pub const SEARCH_PATH_ENV: &str = "PATH";

/// Separator between entries of the search path.
pub const SEARCH_PATH_SEPARATOR: u8 = b':';

/// Permission bit that marks a directory as writable by any user.
#[cfg(unix)]
pub const WORLD_WRITE_BIT: u32 = 0o002;

/// Return the first directory in `search_path` that qualifies as an install target.
///
/// The search path is taken as raw bytes, so an entry that isn't valid UTF-8
/// is checked (and usually skipped) on its own without affecting the others.
/// Candidates that cannot be stat'ed are skipped. Returns `None` when nothing
/// qualifies.
pub fn resolve_default_path(search_path: impl AsRef<OsStr>) -> Option<PathBuf> {
    let search_path = search_path.as_ref();
    tracing::debug!(
        search_path = %search_path.to_string_lossy(),
        "scanning search path for a writable directory"
    );

    for candidate in split_search_path(search_path) {
        tracing::debug!(path = %candidate.display(), "checking candidate");

        if is_world_writable_dir(&candidate) {
            tracing::debug!(path = %candidate.display(), "candidate is a world-writable directory");
            return Some(candidate);
        }
    }

    None
}

/// Split a search path on `:`, dropping empty entries.
#[cfg(unix)]
pub fn split_search_path(search_path: &OsStr) -> Vec<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    search_path
        .as_bytes()
        .split(|b| *b == SEARCH_PATH_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .map(|entry| PathBuf::from(OsStr::from_bytes(entry)))
        .collect()
}

#[cfg(not(unix))]
pub fn split_search_path(search_path: &OsStr) -> Vec<PathBuf> {
    search_path
        .to_string_lossy()
        .split(SEARCH_PATH_SEPARATOR as char)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Check whether `path` is an existing directory with the world-write bit set.
#[cfg(unix)]
pub fn is_world_writable_dir(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(meta) => meta.is_dir() && meta.permissions().mode() & WORLD_WRITE_BIT != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_world_writable_dir(path: &Path) -> bool {
    // No mode bits here; a directory that isn't read-only is the closest match
    match fs::metadata(path) {
        Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
        Err(_) => false,
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn dir_with_mode(root: &TempDir, name: &str, mode: u32) -> PathBuf {
        let path = root.path().join(name);
        fs::create_dir(&path).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    fn join<P: AsRef<Path>>(paths: &[P]) -> String {
        paths
            .iter()
            .map(|p| p.as_ref().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(":")
    }

    #[test]
    fn test_skips_readonly_and_picks_writable() {
        let root = TempDir::new().unwrap();
        let readonly = dir_with_mode(&root, "readonly", 0o755);
        let writable = dir_with_mode(&root, "writable", 0o777);

        let resolved = resolve_default_path(&join(&[&readonly, &writable]));

        assert_eq!(resolved, Some(writable));
    }

    #[test]
    fn test_first_match_wins() {
        let root = TempDir::new().unwrap();
        let first = dir_with_mode(&root, "first", 0o777);
        let second = dir_with_mode(&root, "second", 0o1777);

        assert_eq!(resolve_default_path(&join(&[&first, &second])), Some(first));
    }

    #[test]
    fn test_owner_write_alone_does_not_qualify() {
        let root = TempDir::new().unwrap();
        let owner_only = dir_with_mode(&root, "mine", 0o700);
        let group_too = dir_with_mode(&root, "ours", 0o770);

        assert_eq!(resolve_default_path(&join(&[&owner_only, &group_too])), None);
    }

    #[test]
    fn test_missing_candidates_are_skipped() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("does-not-exist");
        let writable = dir_with_mode(&root, "writable", 0o777);

        let resolved = resolve_default_path(&join(&[&missing, &writable]));

        assert_eq!(resolved, Some(writable));
    }

    #[test]
    fn test_world_writable_file_is_not_a_dir() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("file");
        fs::write(&file, b"").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o666)).unwrap();

        assert_eq!(resolve_default_path(&join(&[&file])), None);
    }

    #[test]
    fn test_nothing_qualifies() {
        assert_eq!(resolve_default_path(""), None);
        assert_eq!(resolve_default_path("::"), None);
        assert_eq!(resolve_default_path("/definitely/not/here"), None);
    }

    #[test]
    fn test_empty_segments_are_ignored() {
        let root = TempDir::new().unwrap();
        let writable = dir_with_mode(&root, "writable", 0o777);
        let search = format!("::{}:", writable.display());

        assert_eq!(resolve_default_path(&search), Some(writable));
    }

    #[test]
    fn test_non_utf8_entry_does_not_hide_later_entries() {
        let root = TempDir::new().unwrap();
        let writable = dir_with_mode(&root, "writable", 0o777);

        let mut raw = b"/bad-\xff-dir:".to_vec();
        raw.extend_from_slice(writable.as_os_str().as_bytes());
        let search = OsString::from_vec(raw);

        assert_eq!(resolve_default_path(&search), Some(writable));
    }

    #[test]
    fn test_split_keeps_raw_bytes() {
        let search = OsString::from_vec(b"/a:\xfe\xff::/b".to_vec());
        let entries = split_search_path(&search);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], PathBuf::from("/a"));
        assert_eq!(entries[1].as_os_str().as_bytes(), b"\xfe\xff");
        assert_eq!(entries[2], PathBuf::from("/b"));
    }
}
