//! Integration tests for the filesystem artifact store.

use std::fs;
use std::path::Path;

use listings_artifact::{
    ArtifactError, ArtifactStore, LocalArtifactStore, METADATA_FILE, PublishRequest, sha256_hex,
};

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn publish_then_resolve_latest_and_exact() {
    let root = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(root.path());

    let file = work.path().join("clean_sample.csv");
    write(&file, "id\n1\n");
    let first = store
        .publish(&PublishRequest::new(
            "clean_sample.csv",
            "clean_sample",
            "Data with outliers and null values removed",
            &file,
        ))
        .unwrap();
    assert_eq!(first.metadata.version, 0);
    assert_eq!(first.reference(), "clean_sample.csv:v0");
    assert_eq!(first.metadata.sha256, sha256_hex(b"id\n1\n"));
    assert!(first.path().parent().unwrap().join(METADATA_FILE).is_file());

    write(&file, "id\n1\n2\n");
    let second = store
        .publish(&PublishRequest::new("clean_sample.csv", "clean_sample", "v2", &file))
        .unwrap();
    assert_eq!(second.metadata.version, 1);

    let latest = store.resolve("clean_sample.csv:latest").unwrap();
    assert_eq!(latest, second);
    let bare = store.resolve("clean_sample.csv").unwrap();
    assert_eq!(bare, second);
    let pinned = store.resolve("clean_sample.csv:v0").unwrap();
    assert_eq!(fs::read_to_string(pinned.path()).unwrap(), "id\n1\n");
}

#[test]
fn republishing_identical_bytes_reuses_version() {
    let root = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(root.path());
    let file = work.path().join("clean_sample.csv");
    write(&file, "id\n1\n");
    let request = PublishRequest::new("clean_sample.csv", "clean_sample", "first", &file);

    let first = store.publish(&request).unwrap();
    let again = store.publish(&request).unwrap();

    assert_eq!(first, again);
    assert_eq!(store.versions("clean_sample.csv").unwrap(), vec![0]);
}

#[test]
fn new_description_gets_a_new_version() {
    let root = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(root.path());
    let file = work.path().join("clean_sample.csv");
    write(&file, "id\n1\n");

    let first = store
        .publish(&PublishRequest::new("clean_sample.csv", "clean_sample", "first", &file))
        .unwrap();
    let second = store
        .publish(&PublishRequest::new("clean_sample.csv", "clean_sample", "second", &file))
        .unwrap();

    assert_eq!(first.metadata.version, 0);
    assert_eq!(second.metadata.version, 1);
    assert_eq!(second.metadata.sha256, first.metadata.sha256);
    let latest = store.resolve("clean_sample.csv").unwrap();
    assert_eq!(latest.metadata.description, "second");
}

#[test]
fn resolve_errors_are_specific() {
    let root = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(root.path());

    assert!(matches!(
        store.resolve("sample.csv:latest"),
        Err(ArtifactError::NotFound { .. })
    ));

    let file = work.path().join("sample.csv");
    write(&file, "id\n");
    store
        .publish(&PublishRequest::new("sample.csv", "raw_data", "raw", &file))
        .unwrap();
    assert!(matches!(
        store.resolve("sample.csv:v7"),
        Err(ArtifactError::VersionNotFound { version: 7, .. })
    ));
    assert!(matches!(
        store.resolve("sample.csv:newest"),
        Err(ArtifactError::InvalidReference { .. })
    ));
}

#[test]
fn publish_requires_existing_file() {
    let root = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(root.path());

    let result = store.publish(&PublishRequest::new(
        "clean_sample.csv",
        "clean_sample",
        "missing",
        root.path().join("nope.csv"),
    ));

    assert!(matches!(result, Err(ArtifactError::SourceMissing { .. })));
}
