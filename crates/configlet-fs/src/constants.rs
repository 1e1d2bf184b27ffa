//! Constants for the on-disk layout of an exercise track.

use std::path::Path;

/// Well-known entries at the root of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackPath {
    /// The `config.json` manifest
    ConfigFile,
    /// The `exercises` directory holding one directory per exercise
    ExercisesDir,
}

impl TrackPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigFile => "config.json",
            Self::ExercisesDir => "exercises",
        }
    }
}

impl AsRef<Path> for TrackPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for TrackPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for TrackPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
