//! Integration tests for the live filesystem adapter.

use std::path::{Path, PathBuf};

use svfs::adapters::live::PortableUncResolver;
use svfs::{FailureKind, FileSystem, LiveFileSystem};
use tempfile::TempDir;

fn scratch() -> (TempDir, LiveFileSystem) {
    let dir = tempfile::tempdir().expect("failed to create scratch directory");
    (dir, LiveFileSystem::new())
}

#[test]
fn write_read_round_trips_with_trailing_newline() {
    let (dir, fs) = scratch();
    let path = dir.path().join("status");

    let wrote = fs.write(&path, "up 42s");
    assert!(wrote.is_ok());
    assert!(*wrote.value());

    let read = fs.read(&path);
    assert!(read.is_ok());
    assert_eq!(read.into_value(), "up 42s\n");
}

#[test]
fn write_rename_exists_scenario() {
    let (dir, fs) = scratch();
    let a = dir.path().join("a");

    assert!(*fs.create_directory(&a).value());
    assert!(*fs.write(&a.join("b.txt"), "hello").value());
    assert_eq!(fs.read(&a.join("b.txt")).into_value(), "hello\n");

    assert!(*fs.rename(&a.join("b.txt"), &a.join("c.txt")).value());
    assert!(!*fs.file_exists(&a.join("b.txt")).value());
    assert!(*fs.file_exists(&a.join("c.txt")).value());
    assert_eq!(fs.read(&a.join("c.txt")).into_value(), "hello\n");
}

#[test]
fn write_leaves_no_partial_file_on_failed_rename() {
    let (dir, fs) = scratch();
    // The destination is an existing directory, so the final rename step
    // must fail after the temporary sibling was written.
    let destination = dir.path().join("occupied");
    assert!(*fs.create_directory(&destination).value());

    let wrote = fs.write(&destination, "payload");
    assert!(!wrote.is_ok());
    assert!(!*wrote.value());
    assert_eq!(wrote.kind(), Some(FailureKind::Rename));

    // Destination untouched, temporary content persisted beside it.
    assert!(*fs.directory_exists(&destination).value());
    let temp = dir.path().join("occupied.new");
    assert_eq!(fs.read(&temp).into_value(), "payload\n");
}

#[test]
fn write_does_not_create_missing_parents() {
    let (dir, fs) = scratch();
    let path = dir.path().join("missing").join("status");

    let wrote = fs.write(&path, "up");
    assert!(!*wrote.value());
    assert!(!*fs.file_exists(&path).value());
}

#[test]
fn create_directory_is_idempotent() {
    let (dir, fs) = scratch();
    let path = dir.path().join("svc");

    assert!(*fs.create_directory(&path).value());
    assert!(*fs.directory_exists(&path).value());
    let again = fs.create_directory(&path);
    assert!(again.is_ok());
    assert!(*again.value());
}

#[test]
fn existence_checks_are_mutually_exclusive() {
    let (dir, fs) = scratch();
    let sub = dir.path().join("svc");
    let file = dir.path().join("status");
    assert!(*fs.create_directory(&sub).value());
    assert!(*fs.write(&file, "up").value());

    for path in [&sub, &file, &dir.path().join("missing")] {
        let is_dir = *fs.directory_exists(path).value();
        let is_file = *fs.file_exists(path).value();
        assert!(!(is_dir && is_file), "{} is both file and directory", path.display());
    }
    assert!(*fs.directory_exists(&sub).value());
    assert!(*fs.file_exists(&file).value());
}

#[test]
fn read_of_missing_file_returns_empty_sentinel() {
    let (dir, fs) = scratch();
    let result = fs.read(&dir.path().join("missing"));

    assert!(!result.is_ok());
    assert_eq!(result.kind(), Some(FailureKind::NotFound));
    assert!(result.value().is_empty());
}

#[test]
fn absolute_returns_original_path_for_missing_target() {
    let (dir, fs) = scratch();
    let missing = dir.path().join("missing");

    let resolved = fs.absolute(&missing);
    assert!(!resolved.is_ok());
    assert_eq!(resolved.kind(), Some(FailureKind::NotFound));
    assert_eq!(resolved.value(), &missing);
}

#[test]
fn absolute_is_a_fixed_point_for_existing_paths() {
    let (dir, fs) = scratch();
    let path = dir.path().join("svc");
    assert!(*fs.create_directory(&path).value());

    let once = fs.absolute(&path);
    assert!(once.is_ok());
    let twice = fs.absolute(once.value());
    assert!(twice.is_ok());
    assert_eq!(once.value(), twice.value());
}

#[test]
fn listing_partitions_children_without_overlap() {
    let (dir, fs) = scratch();
    assert!(*fs.create_directory(&dir.path().join("log")).value());
    assert!(*fs.create_directory(&dir.path().join("env")).value());
    assert!(*fs.write(&dir.path().join("run"), "#!/bin/sh").value());
    assert!(*fs.write(&dir.path().join("down"), "").value());

    let mut directories = fs.directories(dir.path()).into_value();
    let mut files = fs.files(dir.path()).into_value();
    directories.sort();
    files.sort();

    assert_eq!(
        directories,
        vec![dir.path().join("env"), dir.path().join("log")]
    );
    assert_eq!(files, vec![dir.path().join("down"), dir.path().join("run")]);

    let mut union: Vec<PathBuf> = directories.iter().chain(files.iter()).cloned().collect();
    union.sort();
    let mut actual: Vec<PathBuf> = std::fs::read_dir(dir.path())
        .expect("failed to list scratch directory")
        .map(|entry| entry.expect("failed to read entry").path())
        .collect();
    actual.sort();
    assert_eq!(union, actual);
}

#[test]
fn listing_of_missing_directory_is_empty() {
    let (dir, fs) = scratch();
    let missing = dir.path().join("missing");

    let directories = fs.directories(&missing);
    assert!(!directories.is_ok());
    assert!(directories.value().is_empty());

    let files = fs.files(&missing);
    assert!(!files.is_ok());
    assert!(files.value().is_empty());
}

#[test]
fn remove_handles_files_directories_and_missing_paths() {
    let (dir, fs) = scratch();
    let file = dir.path().join("status");
    assert!(*fs.write(&file, "up").value());

    assert!(*fs.remove(&file).value());
    assert!(!*fs.file_exists(&file).value());

    assert!(*fs.remove(&dir.path().join("missing")).value());

    let full = dir.path().join("svc");
    assert!(*fs.create_directory(&full).value());
    assert!(*fs.write(&full.join("status"), "up").value());
    let result = fs.remove(&full);
    assert!(!*result.value());
    assert!(*fs.directory_exists(&full).value());

    let empty = dir.path().join("empty");
    assert!(*fs.create_directory(&empty).value());
    assert!(*fs.remove(&empty).value());
    assert!(!*fs.directory_exists(&empty).value());
}

#[test]
fn canonical_unc_falls_back_to_absolute_without_native_resolver() {
    let dir = tempfile::tempdir().expect("failed to create scratch directory");
    let fs = LiveFileSystem::with_resolver(Box::new(PortableUncResolver));
    let path = dir.path().join("svc");
    assert!(*fs.create_directory(&path).value());

    let unc = fs.canonical_unc(&path);
    let absolute = fs.absolute(&path);
    assert!(unc.is_ok());
    assert_eq!(unc.value(), absolute.value());

    let missing = dir.path().join("missing");
    let fallback = fs.canonical_unc(&missing);
    assert!(!fallback.is_ok());
    assert_eq!(fallback.value(), &missing);
}

#[test]
fn change_directory_updates_process_cwd() {
    let (dir, fs) = scratch();

    let moved = fs.change_directory(dir.path());
    assert!(moved.is_ok());
    assert!(*moved.value());
    let cwd = std::env::current_dir().expect("failed to query cwd");
    assert_eq!(
        fs.absolute(&cwd).into_value(),
        fs.absolute(dir.path()).into_value()
    );

    let failed = fs.change_directory(Path::new("/nonexistent/svfs/test/path"));
    assert!(!failed.is_ok());
    assert!(!*failed.value());
}
