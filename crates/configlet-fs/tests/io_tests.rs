//! Tests for the read-only directory operations

use configlet_fs::{NormalizedPath, io};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn list_visible_dirs_skips_hidden_dirs_and_files() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("bob")).unwrap();
    fs::create_dir(dir.path().join("leap")).unwrap();
    fs::create_dir(dir.path().join(".meta")).unwrap();
    fs::write(dir.path().join("README.md"), "readme").unwrap();

    let names = io::list_visible_dirs(&NormalizedPath::new(dir.path())).unwrap();

    assert_eq!(sorted(names), vec!["bob".to_string(), "leap".to_string()]);
}

#[test]
fn list_visible_dirs_of_missing_directory_is_empty() {
    let dir = tempdir().unwrap();
    let missing = NormalizedPath::new(dir.path().join("exercises"));

    let names = io::list_visible_dirs(&missing).unwrap();

    assert!(names.is_empty());
}

#[test]
fn list_visible_dirs_of_a_file_is_an_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("exercises");
    fs::write(&file, "not a directory").unwrap();

    let result = io::list_visible_dirs(&NormalizedPath::new(&file));

    assert!(result.is_err(), "a file in place of the directory should fail");
}

#[test]
fn find_all_files_recurses_into_nested_dirs() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/deep")).unwrap();
    fs::create_dir_all(root.join(".meta")).unwrap();
    fs::write(root.join("bob.go"), "").unwrap();
    fs::write(root.join("src/deep/example.go"), "").unwrap();
    fs::write(root.join(".meta/solution.go"), "").unwrap();

    let files = io::find_all_files(&NormalizedPath::new(root)).unwrap();
    let mut relative: Vec<String> = files
        .iter()
        .filter_map(|f| f.strip_prefix(root).ok())
        .map(|f| NormalizedPath::new(f).as_str().to_string())
        .collect();
    relative.sort();

    assert_eq!(
        relative,
        vec![".meta/solution.go", "bob.go", "src/deep/example.go"]
    );
}

#[test]
fn find_all_files_of_empty_dir_is_empty() {
    let dir = tempdir().unwrap();

    let files = io::find_all_files(&NormalizedPath::new(dir.path())).unwrap();

    assert!(files.is_empty());
}

#[test]
fn find_all_files_of_missing_dir_is_an_error() {
    let dir = tempdir().unwrap();

    let result = io::find_all_files(&NormalizedPath::new(dir.path().join("nope")));

    assert!(result.is_err());
}

#[test]
fn dir_exists_distinguishes_files_and_dirs() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("bob")).unwrap();
    fs::write(dir.path().join("file"), "").unwrap();

    assert!(io::dir_exists(&NormalizedPath::new(dir.path().join("bob"))).unwrap());
    assert!(!io::dir_exists(&NormalizedPath::new(dir.path().join("file"))).unwrap());
    assert!(!io::dir_exists(&NormalizedPath::new(dir.path().join("missing"))).unwrap());
}

#[test]
fn read_text_nonexistent_file_returns_error() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("config.json"));

    let err = io::read_text(&path).unwrap_err();

    assert_eq!(err.path(), path.to_native().as_path());
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn list_visible_dirs_of_unreadable_directory_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let locked = dir.path().join("exercises");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let result = io::list_visible_dirs(&NormalizedPath::new(&locked));

        fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
        assert!(result.is_err(), "permission denied must not read as empty");
    }

    #[test]
    fn find_all_files_does_not_follow_symlinked_dirs() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("bob");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("bob.go"), "").unwrap();
        // A link back to its own parent would loop forever if followed.
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        let files = io::find_all_files(&NormalizedPath::new(&root)).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn find_all_files_keeps_backslash_in_names() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("bob");
        let odd = root.join("a\\b");
        fs::create_dir_all(&odd).unwrap();
        fs::write(odd.join("x.go"), "").unwrap();

        let files = io::find_all_files(&NormalizedPath::new(&root)).unwrap();

        assert_eq!(files, vec![odd.join("x.go")]);
        assert!(files[0].is_file());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn find_all_files_walks_non_utf8_dirs() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let root = dir.path().join("bob");
        let odd = root.join(OsStr::from_bytes(b"sub\xff"));
        fs::create_dir_all(&odd).unwrap();
        fs::write(odd.join("x.go"), "").unwrap();

        let files = io::find_all_files(&NormalizedPath::new(&root)).unwrap();

        assert_eq!(files, vec![odd.join("x.go")]);
    }

    #[test]
    fn dir_exists_does_not_follow_symlinks() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert!(io::dir_exists(&NormalizedPath::new(&real)).unwrap());
        assert!(!io::dir_exists(&NormalizedPath::new(&link)).unwrap());
    }
}
