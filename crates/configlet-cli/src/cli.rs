//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Check that an exercise track's config.json matches its exercises
#[derive(Parser, Debug)]
#[command(name = "configlet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the root of the track repository
    pub path: PathBuf,

    /// Print the check report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, env = "CONFIGLET_VERBOSE")]
    pub verbose: bool,
}
