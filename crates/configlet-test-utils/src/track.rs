//! [`TestTrack`] builder for track-checking scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary exercise track with helpers for building its manifest and
/// exercise tree.
///
/// # Example
///
/// ```rust,no_run
/// use configlet_test_utils::track::TestTrack;
///
/// let track = TestTrack::new();
/// track.write_manifest(&["bob"], &[], &["trivial"]);
/// track.add_file("bob", "example.go");
/// track.add_exercise_dir("trivial");
/// ```
pub struct TestTrack {
    temp_dir: TempDir,
}

impl Default for TestTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTrack {
    /// Create an empty track directory (no manifest, no `exercises/`).
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the track.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the path of `exercises/<slug>`.
    pub fn exercise_path(&self, slug: &str) -> PathBuf {
        self.root().join("exercises").join(slug)
    }

    /// Write a `config.json` with the given categories.
    ///
    /// Each problem slug becomes an exercise entry with a made-up uuid.
    pub fn write_manifest(&self, problems: &[&str], deprecated: &[&str], foregone: &[&str]) {
        let exercises: Vec<Value> = problems
            .iter()
            .enumerate()
            .map(|(i, slug)| json!({ "slug": slug, "uuid": format!("uuid-{i}") }))
            .collect();

        self.write_manifest_json(&json!({
            "slug": "test",
            "language": "Test",
            "active": true,
            "exercises": exercises,
            "deprecated": deprecated,
            "foregone": foregone,
        }));
    }

    /// Write `value` as the track's `config.json`.
    pub fn write_manifest_json(&self, value: &Value) {
        let content = serde_json::to_string_pretty(value).unwrap();
        self.write_raw_manifest(&content);
    }

    /// Write `content` verbatim as the track's `config.json`.
    pub fn write_raw_manifest(&self, content: &str) {
        fs::write(self.root().join("config.json"), content).unwrap();
    }

    /// Create an (empty) exercise directory.
    pub fn add_exercise_dir(&self, slug: &str) -> PathBuf {
        let path = self.exercise_path(slug);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create `exercises/<slug>/<relative>`, making parent directories.
    pub fn add_file(&self, slug: &str, relative: &str) -> PathBuf {
        let path = self.exercise_path(slug).join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, format!("// {relative}\n")).unwrap();
        path
    }

    /// Create a file directly at `relative` under the track root.
    pub fn add_root_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
