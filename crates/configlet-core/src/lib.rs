//! Track reconciliation for configlet
//!
//! Compares what a track's `config.json` declares with the exercise
//! directories that actually exist on disk.
//!
//! Every query on [`Track`] reloads the manifest and rereads the
//! filesystem, so queries are independent and can run in any order.

pub mod check;
pub mod error;
pub mod track;

pub use check::{CheckKind, CheckOutcome, CheckReport};
pub use error::{Error, Result};
pub use track::Track;
