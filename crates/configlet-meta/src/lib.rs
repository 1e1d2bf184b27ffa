//! Track manifest types and loading for configlet.
//!
//! The manifest is the `config.json` at the root of an exercise track.
//! It declares which exercise slugs the track delivers, which are
//! deprecated and which are deliberately never implemented.

pub mod error;
pub mod loader;
pub mod manifest;

pub use error::{Error, Result};
pub use loader::load;
pub use manifest::{DEFAULT_SOLUTION_PATTERN, Exercise, Manifest};
