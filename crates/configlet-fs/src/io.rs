//! Read-only I/O operations over a track tree
//!
//! Nothing in this module writes to disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Whether a directory entry name is hidden (starts with a dot).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check whether `path` is an existing directory.
///
/// Symlinks are not followed, so a symlink to a directory is `Ok(false)`,
/// in agreement with [`list_visible_dirs`]. A path that does not exist is
/// `Ok(false)`; any other failure to stat the path is an error.
pub fn dir_exists(path: &NormalizedPath) -> Result<bool> {
    let native_path = path.to_native();
    match fs::symlink_metadata(&native_path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// List the names of the visible subdirectories directly under `dir`.
///
/// Hidden directories, files and symlinks are skipped. A `dir` that does
/// not exist has no subdirectories. Names are returned in the order the
/// filesystem yields them.
pub fn list_visible_dirs(dir: &NormalizedPath) -> Result<Vec<String>> {
    let native_path = dir.to_native();
    let entries = match fs::read_dir(&native_path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("{} does not exist, no directories", dir);
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io(&native_path, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_path, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_hidden(&name) {
            names.push(name);
        }
    }

    tracing::trace!("{} visible directories under {}", names.len(), dir);
    Ok(names)
}

/// Recursively collect every file below `dir`.
///
/// All nested subdirectories are visited, hidden ones included. Symlinks
/// are reported as entries and never followed. Paths are the real native
/// paths, so names that are not UTF-8 or contain `\` stay intact.
pub fn find_all_files(dir: &NormalizedPath) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(&dir.to_native(), &mut files)?;
    Ok(files)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let sub_path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&sub_path, e))?;
        if file_type.is_dir() {
            collect_files(&sub_path, out)?;
        } else {
            out.push(sub_path);
        }
    }
    Ok(())
}
