//! End-to-end walk through one record's life on a JSON data file.

use patienttrack_persistence::error::{ResourceError, StorageError};
use patienttrack_persistence::types::{PatientUpdate, SortDirective};

use crate::common::*;

#[tokio::test]
async fn test_single_record_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    let service = json_file_service(&path, &scenario_fixtures());

    // Unknown id
    let err = service.read("PT-999").await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::NotFound { .. })
    ));

    // Duplicate id
    let err = service
        .create("PT-001", PatientFixture::new("PT-001").patient())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::AlreadyExists { .. })
    ));

    // Age bump, everything else untouched
    let changes = PatientUpdate {
        age: Some(31),
        ..Default::default()
    };
    service.update("PT-001", &changes).await.unwrap();
    let reopened = open_json_file_service(&path);
    let stored = reopened.read("PT-001").await.unwrap().patient;
    let mut expected = scenario_fixtures()[0].patient();
    expected.age = 31;
    assert_eq!(stored, expected);

    // Shorter patient sorts first
    service
        .create("PT-002", PatientFixture::new("PT-002").with_height(160.0).patient())
        .await
        .unwrap();
    let sorted = service
        .sorted(SortDirective::parse("height", Some("asc")).unwrap())
        .await
        .unwrap();
    let heights: Vec<f64> = sorted.iter().map(|r| r.patient.height).collect();
    assert_eq!(heights, vec![160.0, 170.0]);
    assert_eq!(sorted[0].id, "PT-002");
}
