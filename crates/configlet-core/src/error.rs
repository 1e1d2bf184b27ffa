//! Error types for configlet-core

/// Result type for configlet-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while checking a track
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest's solution pattern is not a valid regex
    #[error("Invalid solution pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Manifest error from configlet-meta
    #[error(transparent)]
    Meta(#[from] configlet_meta::Error),

    /// Filesystem error from configlet-fs
    #[error(transparent)]
    Fs(#[from] configlet_fs::Error),
}
