//! Tests for record deletion.

use patienttrack_persistence::error::{ResourceError, StorageError};

use crate::common::*;

/// Test that a deleted record is gone and the others stay.
#[tokio::test]
async fn test_delete_existing_record() {
    let service = memory_service(&[PatientFixture::new("P001"), PatientFixture::new("P002")]);

    let removed = service.delete("P001").await.unwrap();

    assert_eq!(removed.id, "P001");
    let collection = service.view().await.unwrap();
    assert!(!collection.contains("P001"));
    assert!(collection.contains("P002"));
}

/// Test that deleting twice fails the second time.
#[tokio::test]
async fn test_delete_twice() {
    let service = memory_service(&[PatientFixture::new("P001")]);

    service.delete("P001").await.unwrap();
    let err = service.delete("P001").await.unwrap_err();

    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::NotFound { .. })
    ));
    assert_eq!(service.store().save_count(), 1);
}

/// Test that a deletion is persisted to the data file.
#[tokio::test]
async fn test_delete_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    let service = json_file_service(&path, &[PatientFixture::new("P001"), PatientFixture::new("P002")]);

    service.delete("P002").await.unwrap();

    let reopened = open_json_file_service(&path);
    let ids: Vec<String> = reopened
        .view()
        .await
        .unwrap()
        .ids()
        .map(String::from)
        .collect();
    assert_eq!(ids, vec!["P001".to_string()]);
}
