//! Error types for configlet-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest file could not be opened or read
    #[error("Unable to read config: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not well-formed JSON or has the wrong shape
    #[error("Unable to parse config: {path} -- {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unable to serialize config: {message}")]
    Serialize { message: String },
}

impl From<configlet_fs::Error> for Error {
    fn from(err: configlet_fs::Error) -> Self {
        match err {
            configlet_fs::Error::Io { path, source } => Self::Read { path, source },
        }
    }
}
