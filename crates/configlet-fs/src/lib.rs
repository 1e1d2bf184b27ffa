//! Filesystem abstraction for configlet
//!
//! Provides normalized path handling and the read-only directory
//! operations the track checks are built on.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::TrackPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
