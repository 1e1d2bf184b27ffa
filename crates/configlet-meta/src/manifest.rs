//! Manifest types for a track's `config.json`

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Pattern used to find reference solutions when the manifest sets none.
///
/// Any file path containing `Example` or `example` is a reference solution.
pub const DEFAULT_SOLUTION_PATTERN: &str = "[Ee]xample";

/// An exercise track's configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Whether the track is enabled
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,

    /// Slugs that are implemented but no longer delivered by default
    #[serde(default, alias = "Deprecated", deserialize_with = "null_as_default")]
    pub deprecated: Vec<String>,

    /// Implemented exercises in delivery order
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<Exercise>,

    /// Slugs the track has chosen never to implement
    #[serde(default, deserialize_with = "null_as_default")]
    pub foregone: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ignore_pattern: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub repository: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,

    /// Regex matched against file paths to find an exercise's reference solution
    #[serde(default, deserialize_with = "null_as_default")]
    pub solution_pattern: String,
}

/// Metadata about an implemented exercise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,

    #[serde(default, skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub core: bool,

    /// Informational only; the manifest-level list is authoritative.
    #[serde(default, skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub deprecated: bool,

    #[serde(default, skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub difficulty: i64,

    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub topics: Vec<String>,

    /// Prerequisite exercise(s), kept as raw JSON and never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_by: Option<serde_json::Value>,
}

impl Manifest {
    /// Parse a manifest from JSON text without normalizing it.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Fill in defaults for values the manifest left empty.
    pub fn normalize(&mut self) {
        if self.solution_pattern.is_empty() {
            self.solution_pattern = DEFAULT_SOLUTION_PATTERN.to_string();
        }
    }

    /// Slugs of the default-delivered exercises, in delivery order.
    pub fn problem_slugs(&self) -> Vec<&str> {
        self.exercises.iter().map(|ex| ex.slug.as_str()).collect()
    }

    /// Every slug the manifest mentions in any category.
    pub fn declared_slugs(&self) -> BTreeSet<String> {
        self.classified_slugs().map(str::to_string).collect()
    }

    /// Every slug occurrence across `exercises`, `deprecated` and `foregone`.
    ///
    /// A slug listed twice is yielded twice.
    pub fn classified_slugs(&self) -> impl Iterator<Item = &str> {
        self.exercises
            .iter()
            .map(|ex| ex.slug.as_str())
            .chain(self.deprecated.iter().map(String::as_str))
            .chain(self.foregone.iter().map(String::as_str))
    }

    /// Re-serialize the manifest as JSON indented by two spaces.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize {
            message: e.to_string(),
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
