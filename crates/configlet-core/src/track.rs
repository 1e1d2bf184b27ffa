//! The track reconciler
//!
//! A [`Track`] is a directory holding a `config.json` manifest and an
//! `exercises/` directory with one subdirectory per implemented exercise.

use std::collections::{BTreeMap, BTreeSet};

use configlet_fs::{NormalizedPath, TrackPath, io};
use configlet_meta::Manifest;
use regex::Regex;

use crate::error::{Error, Result};

/// An exercise track rooted at a directory.
///
/// Holds only paths. Each query loads the manifest and reads the
/// filesystem afresh, so the filesystem may change between queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    root: NormalizedPath,
}

impl Track {
    /// Create a track rooted at `root`. No I/O happens here.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Location of the track manifest.
    pub fn config_file(&self) -> NormalizedPath {
        self.root.join(TrackPath::ConfigFile.as_str())
    }

    /// Location of the directory holding the exercise implementations.
    pub fn exercises_dir(&self) -> NormalizedPath {
        self.root.join(TrackPath::ExercisesDir.as_str())
    }

    /// Load the track's manifest.
    pub fn config(&self) -> Result<Manifest> {
        Ok(configlet_meta::load(&self.config_file())?)
    }

    /// Resolve the implementation directory for `slug`.
    ///
    /// Returns `None` when `exercises/<slug>` does not exist, is not a
    /// directory, or is hidden.
    pub fn exercise_dir(&self, slug: &str) -> Result<Option<NormalizedPath>> {
        if slug.is_empty() || io::is_hidden(slug) {
            return Ok(None);
        }
        let path = self.exercises_dir().join(slug);
        if io::dir_exists(&path)? {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Load the manifest and re-serialize it as indented JSON.
    pub fn validate_config(&self) -> Result<String> {
        let manifest = self.config()?;
        Ok(manifest.to_pretty_json()?)
    }

    /// Whether the manifest loads and re-serializes without error.
    pub fn has_valid_config(&self) -> bool {
        match self.validate_config() {
            Ok(rendered) => {
                tracing::trace!("Re-serialized {}:\n{}", self.config_file(), rendered);
                true
            }
            Err(e) => {
                tracing::debug!("{} is invalid: {}", self.config_file(), e);
                false
            }
        }
    }

    /// Slugs of the default-delivered exercises.
    pub fn problems(&self) -> Result<BTreeSet<String>> {
        let manifest = self.config()?;
        Ok(manifest
            .problem_slugs()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Every slug mentioned by the manifest, in any category.
    pub fn slugs(&self) -> Result<BTreeSet<String>> {
        Ok(self.config()?.declared_slugs())
    }

    /// Names of the visible exercise directories on disk.
    ///
    /// A track without an `exercises/` directory has none.
    pub fn dirs(&self) -> Result<BTreeSet<String>> {
        let dirs: BTreeSet<String> = io::list_visible_dirs(&self.exercises_dir())?
            .into_iter()
            .collect();
        tracing::debug!("Found {} exercise directories", dirs.len());
        Ok(dirs)
    }

    /// Problems that have no directory.
    pub fn missing_problems(&self) -> Result<Vec<String>> {
        let dirs = self.dirs()?;
        let problems = self.problems()?;

        Ok(problems.difference(&dirs).cloned().collect())
    }

    /// Directories that the manifest does not mention anywhere.
    pub fn unconfigured_problems(&self) -> Result<Vec<String>> {
        let dirs = self.dirs()?;
        let slugs = self.slugs()?;

        Ok(dirs.difference(&slugs).cloned().collect())
    }

    /// Implemented problems with no file matching the solution pattern.
    ///
    /// A reference solution that is not named to match the pattern would
    /// be served to students along with the exercise, so this is also a
    /// check against leaking solutions.
    pub fn problems_lacking_example(&self) -> Result<Vec<String>> {
        let manifest = self.config()?;
        let pattern = Regex::new(&manifest.solution_pattern).map_err(|source| Error::Pattern {
            pattern: manifest.solution_pattern.clone(),
            source,
        })?;

        let mut issues = BTreeSet::new();
        for slug in manifest.problem_slugs() {
            let Some(dir) = self.exercise_dir(slug)? else {
                continue;
            };

            let native_dir = dir.to_native();
            let files = io::find_all_files(&dir)?;
            let found = files.iter().any(|file| {
                let relative =
                    NormalizedPath::new(file.strip_prefix(&native_dir).unwrap_or(file.as_path()));
                pattern.is_match(relative.as_str())
            });
            if !found {
                tracing::debug!("{} has no file matching {}", slug, pattern);
                issues.insert(slug.to_string());
            }
        }

        Ok(issues.into_iter().collect())
    }

    /// Foregone slugs that have a directory anyway.
    pub fn foregone_violations(&self) -> Result<Vec<String>> {
        let manifest = self.config()?;
        let dirs = self.dirs()?;

        let foregone: BTreeSet<&str> = manifest.foregone.iter().map(String::as_str).collect();
        Ok(foregone
            .into_iter()
            .filter(|slug| dirs.contains(*slug))
            .map(str::to_string)
            .collect())
    }

    /// Slugs listed more than once across exercises, deprecated and foregone.
    ///
    /// Deprecated slugs have files but are not served by default; foregone
    /// slugs must have none, so no slug can sensibly be in two categories.
    /// The result is sorted.
    pub fn duplicate_slugs(&self) -> Result<Vec<String>> {
        let manifest = self.config()?;

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for slug in manifest.classified_slugs() {
            *counts.entry(slug).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(slug, _)| slug.to_string())
            .collect())
    }
}
