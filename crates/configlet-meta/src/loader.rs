//! Loading the track manifest from disk

use configlet_fs::{NormalizedPath, io};

use crate::manifest::Manifest;
use crate::{Error, Result};

/// Load and normalize the manifest at `path`.
///
/// # Errors
///
/// * [`Error::Read`] if the file cannot be read
/// * [`Error::Parse`] if it is not JSON of the manifest's shape
pub fn load(path: &NormalizedPath) -> Result<Manifest> {
    let content = io::read_text(path)?;

    let mut manifest = Manifest::parse(&content).map_err(|e| Error::Parse {
        path: path.to_native(),
        message: e.to_string(),
    })?;
    manifest.normalize();

    tracing::debug!(
        "Loaded {}: {} exercises, {} deprecated, {} foregone",
        path,
        manifest.exercises.len(),
        manifest.deprecated.len(),
        manifest.foregone.len()
    );
    Ok(manifest)
}
