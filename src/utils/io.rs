//! Filesystem primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Rename a file with standardized error handling.
///
/// Wraps `fs::rename` with consistent `Error::internal_io` formatting. Both
/// paths are expected to share a parent directory.
pub fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("rename {} -> {}", from.display(), to.display())),
        )
    })
}

/// Whether `a` and `b` name the same file on disk.
///
/// Identity comes from the filesystem, not from the spelling of the paths:
/// `Draft.txt` and `draft.txt` are one file on a case-insensitive volume and
/// two files elsewhere. Missing paths are never the same file.
#[cfg(unix)]
pub fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Absolute form of `path`, resolved against the current directory.
///
/// Does not touch the filesystem beyond reading the working directory, so
/// the result may name something that does not exist.
pub fn absolutize(path: &Path) -> Result<std::path::PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("read current directory".to_string()))
    })?;
    Ok(cwd.join(path))
}
