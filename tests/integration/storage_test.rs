// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serprs::domain::repositories::storage_repository::{StorageError, StorageRepository};
use serprs::infrastructure::storage::LocalStorage;

#[tokio::test]
async fn test_local_storage_save_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path());

    storage.save("report.pdf", b"%PDF-1.3").await.unwrap();

    let data = storage.get("report.pdf").await.unwrap();
    assert_eq!(data, Some(b"%PDF-1.3".to_vec()));
    assert_eq!(storage.get("missing.pdf").await.unwrap(), None);
    assert!(storage.location("report.pdf").ends_with("report.pdf"));
}

#[tokio::test]
async fn test_local_storage_never_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path());

    storage.save("report.pdf", b"first").await.unwrap();
    let err = storage.save("report.pdf", b"second").await.unwrap_err();

    assert!(matches!(err, StorageError::AlreadyExists(_)));
    assert_eq!(storage.get("report.pdf").await.unwrap(), Some(b"first".to_vec()));
}

#[tokio::test]
async fn test_local_storage_lists_files_by_suffix() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();
    let storage = LocalStorage::new(dir.path());

    storage.save("b.pdf", b"b").await.unwrap();
    storage.save("a.pdf", b"a").await.unwrap();
    storage.save("notes.txt", b"n").await.unwrap();

    let files = storage.list(".pdf").await.unwrap();
    assert_eq!(files, vec!["a.pdf".to_string(), "b.pdf".to_string()]);
}

#[tokio::test]
async fn test_local_storage_missing_directory_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path().join("does-not-exist"));

    assert!(storage.list(".pdf").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_local_storage_rejects_path_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path());

    let err = storage.save("../escape.pdf", b"x").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
}
