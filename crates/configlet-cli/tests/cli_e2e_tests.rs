//! CLI end-to-end tests that invoke the compiled `configlet` binary.

use assert_cmd::Command;
use configlet_test_utils::track::TestTrack;
use predicates::prelude::*;

fn configlet() -> Command {
    let mut cmd = Command::cargo_bin("configlet").expect("configlet binary should build");
    cmd.env_remove("CONFIGLET_VERBOSE");
    cmd
}

#[test]
fn test_help_exits_zero() {
    configlet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_missing_path_argument_fails() {
    configlet().assert().failure();
}

#[test]
fn test_clean_track_prints_ok() {
    let track = TestTrack::new();
    track.write_manifest(&["bob", "leap"], &["binary"], &["trivial"]);
    track.add_file("bob", "example.go");
    track.add_file("leap", ".meta/example.go");
    track.add_file("binary", "example.go");

    configlet()
        .arg(track.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Evaluating"))
        .stdout(predicate::str::contains("... OK"));
}

#[test]
fn test_every_failure_is_reported() {
    let track = TestTrack::new();
    track.write_manifest(&["bob", "leap"], &["leap"], &["trivial"]);
    track.add_file("bob", "bob.go");
    track.add_exercise_dir("trivial");
    track.add_exercise_dir("stray");

    configlet()
        .arg(track.root())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No directory found for [leap]."))
        .stdout(predicate::str::contains("config.json does not include [stray]."))
        .stdout(predicate::str::contains("missing example solution in [bob]."))
        .stdout(predicate::str::contains("[trivial] should not be implemented."))
        .stdout(predicate::str::contains("[leap] found in multiple categories."))
        .stdout(predicate::str::contains("... OK").not());
}

#[test]
fn test_invalid_config_is_reported() {
    let track = TestTrack::new();
    track.write_raw_manifest("{ \"exercises\": ");

    configlet()
        .arg(track.root())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("config.json is invalid"))
        .stdout(predicate::str::contains("Unable to parse config"));
}

#[test]
fn test_json_report() {
    let track = TestTrack::new();
    track.write_manifest(&["bob"], &[], &["trivial"]);
    track.add_file("bob", "example.go");
    track.add_exercise_dir("trivial");

    let output = configlet()
        .arg(track.root())
        .arg("--json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid_config"], serde_json::json!(true));
    let foregone = report["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["kind"] == "foregone-violations")
        .unwrap();
    assert_eq!(foregone["offenders"], serde_json::json!(["trivial"]));
}

#[test]
fn test_nonexistent_track_is_an_error() {
    let track = TestTrack::new();

    configlet()
        .arg(track.root().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}
