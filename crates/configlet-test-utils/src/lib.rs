//! Shared test utilities for the configlet workspace.
//!
//! This crate is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`track`] — [`TestTrack`](track::TestTrack) builder for on-disk tracks

pub mod track;
