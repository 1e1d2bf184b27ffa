//! Running every track check and collecting the results
//!
//! Each query on [`Track`] stays independently callable; this module only
//! runs them in a fixed order and records what each one found.

use serde::Serialize;

use crate::error::Result;
use crate::track::Track;

/// One of the list-producing track checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Configured problems without a directory
    MissingDirectories,
    /// Directories not mentioned in the manifest
    UnconfiguredDirectories,
    /// Implemented problems without a reference solution
    MissingExampleSolutions,
    /// Foregone slugs that were implemented anyway
    ForegoneViolations,
    /// Slugs listed in more than one category
    DuplicateSlugs,
}

impl CheckKind {
    /// Every check, in the order they are reported.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::MissingDirectories,
        CheckKind::UnconfiguredDirectories,
        CheckKind::MissingExampleSolutions,
        CheckKind::ForegoneViolations,
        CheckKind::DuplicateSlugs,
    ];

    /// Run this check against `track`.
    pub fn run(&self, track: &Track) -> Result<Vec<String>> {
        match self {
            Self::MissingDirectories => track.missing_problems(),
            Self::UnconfiguredDirectories => track.unconfigured_problems(),
            Self::MissingExampleSolutions => track.problems_lacking_example(),
            Self::ForegoneViolations => track.foregone_violations(),
            Self::DuplicateSlugs => track.duplicate_slugs(),
        }
    }

    /// Human-readable description of this check failing for `offenders`.
    pub fn describe(&self, offenders: &[String]) -> String {
        let list = format!("[{}]", offenders.join(", "));
        match self {
            Self::MissingDirectories => format!("No directory found for {list}."),
            Self::UnconfiguredDirectories => format!("config.json does not include {list}."),
            Self::MissingExampleSolutions => format!("missing example solution in {list}."),
            Self::ForegoneViolations => format!("{list} should not be implemented."),
            Self::DuplicateSlugs => format!("{list} found in multiple categories."),
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDirectories => write!(f, "missing-directories"),
            Self::UnconfiguredDirectories => write!(f, "unconfigured-directories"),
            Self::MissingExampleSolutions => write!(f, "missing-example-solutions"),
            Self::ForegoneViolations => write!(f, "foregone-violations"),
            Self::DuplicateSlugs => write!(f, "duplicate-slugs"),
        }
    }
}

/// The result of running a single check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    /// Slugs or directory names that violate the check
    pub offenders: Vec<String>,
    /// Why the check could not complete, if it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckOutcome {
    fn from_result(kind: CheckKind, result: Result<Vec<String>>) -> Self {
        match result {
            Ok(offenders) => Self {
                kind,
                offenders,
                error: None,
            },
            Err(e) => Self {
                kind,
                offenders: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    /// True when the check completed and found nothing.
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.offenders.is_empty()
    }
}

/// Results of every check against one track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Track root the checks ran against
    pub root: String,
    /// Whether the manifest loads and re-serializes
    pub valid_config: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_error: Option<String>,
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    /// True when the config is valid and every check passed.
    pub fn is_ok(&self) -> bool {
        self.valid_config && self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Checks that errored or found offenders.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    /// The outcome of a particular check.
    pub fn outcome(&self, kind: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.kind == kind)
    }
}

impl Track {
    /// Run the validity check and every [`CheckKind`] against this track.
    ///
    /// A failing check does not stop the others from running.
    pub fn check_all(&self) -> CheckReport {
        let config_error = self.validate_config().err().map(|e| e.to_string());

        let outcomes: Vec<CheckOutcome> = CheckKind::ALL
            .iter()
            .map(|kind| {
                let outcome = CheckOutcome::from_result(*kind, kind.run(self));
                tracing::debug!(
                    "{}: {} offenders{}",
                    kind,
                    outcome.offenders.len(),
                    if outcome.error.is_some() { " (errored)" } else { "" }
                );
                outcome
            })
            .collect();

        CheckReport {
            root: self.root().to_string(),
            valid_config: config_error.is_none(),
            config_error,
            outcomes,
        }
    }
}
