//! Command implementations for configlet-cli

pub mod check;

pub use check::run_check;
