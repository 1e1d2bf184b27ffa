//! Check command implementation
//!
//! Runs every track check, prints what failed and reports whether the
//! track is consistent.

use std::path::Path;

use colored::Colorize;
use configlet_core::{CheckReport, Track};
use configlet_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run every check against the track at `path`.
///
/// Returns `Ok(false)` when any check failed; the caller turns that into
/// a non-zero exit status.
pub fn run_check(path: &Path, json: bool) -> Result<bool> {
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    let root = dunce::canonicalize(path)?;
    let track = Track::new(NormalizedPath::new(&root));

    if !json {
        println!("Evaluating {}", path.display());
    }

    let report = track.check_all();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.is_ok());
    }

    for line in failure_lines(&report) {
        println!("{} {}", "->".red().bold(), line);
    }
    if report.is_ok() {
        println!("{}", "... OK".green().bold());
    }

    Ok(report.is_ok())
}

/// One line per failed check, in report order.
pub fn failure_lines(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.valid_config {
        lines.push("config.json is invalid".to_string());
    }

    for outcome in report.failures() {
        if let Some(error) = &outcome.error {
            lines.push(error.clone());
        }
        if !outcome.offenders.is_empty() {
            lines.push(outcome.kind.describe(&outcome.offenders));
        }
    }

    lines
}
