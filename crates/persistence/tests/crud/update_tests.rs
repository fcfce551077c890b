//! Tests for partial updates.

use serde_json::json;

use patienttrack_persistence::error::{ResourceError, StorageError, ValidationError};
use patienttrack_persistence::schema;
use patienttrack_persistence::types::{Gender, PatientUpdate};

use crate::common::*;

// ============================================================================
// Update Tests - Merge
// ============================================================================

/// Test that only the fields present in the payload change.
#[tokio::test]
async fn test_update_sets_only_present_fields() {
    let fixture = PatientFixture::new("P001");
    let service = memory_service(std::slice::from_ref(&fixture));

    let changes = PatientUpdate {
        city: Some("Shillong".to_string()),
        weight: Some(70.5),
        ..Default::default()
    };
    let record = service.update("P001", &changes).await.unwrap();

    let mut expected = fixture.patient();
    expected.city = "Shillong".to_string();
    expected.weight = 70.5;
    assert_eq!(record.patient, expected);
    assert_eq!(service.read("P001").await.unwrap().patient, expected);
}

/// Test that the derived BMI follows a height change.
#[tokio::test]
async fn test_update_recomputes_bmi() {
    let service = memory_service(&[PatientFixture::new("P001").with_weight(90.0)]);

    let changes = PatientUpdate {
        height: Some(165.0),
        ..Default::default()
    };
    let record = service.update("P001", &changes).await.unwrap();

    assert_eq!(record.bmi, 33.06);
}

/// Test an update parsed from a JSON body.
#[tokio::test]
async fn test_update_from_json_body() {
    let service = memory_service(&[PatientFixture::new("P001")]);

    let changes = schema::parse_update(&json!({"gender": "others", "nickname": "ignored"})).unwrap();
    let record = service.update("P001", &changes).await.unwrap();

    assert_eq!(record.patient.gender, Gender::Others);
}

/// Test that an empty update succeeds and changes nothing.
#[tokio::test]
async fn test_empty_update_is_a_no_op() {
    let fixture = PatientFixture::new("P001");
    let service = memory_service(std::slice::from_ref(&fixture));

    let record = service
        .update("P001", &PatientUpdate::default())
        .await
        .unwrap();

    assert_eq!(record.patient, fixture.patient());
}

// ============================================================================
// Update Tests - Failures
// ============================================================================

/// Test that an update producing an out-of-range value leaves the store unchanged.
#[tokio::test]
async fn test_update_out_of_range_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    let service = json_file_service(&path, &[PatientFixture::new("P001")]);
    let before = std::fs::read(&path).unwrap();

    let changes = PatientUpdate {
        age: Some(200),
        city: Some("Nagpur".to_string()),
        ..Default::default()
    };
    let err = service.update("P001", &changes).await.unwrap_err();

    assert!(matches!(
        err,
        StorageError::Validation(ValidationError::InvalidField { ref field, .. }) if field == "age"
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(
        service.read("P001").await.unwrap().patient,
        PatientFixture::new("P001").patient()
    );
}

/// Test updating a record that does not exist.
#[tokio::test]
async fn test_update_missing_record() {
    let service = memory_service(&[PatientFixture::new("P001")]);

    let err = service
        .update("P404", &PatientUpdate::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::NotFound { .. })
    ));
}

/// Test that payloads cannot clear a field or change the id.
#[test]
fn test_update_body_rejects_null_and_id() {
    let err = schema::parse_update(&json!({"city": null})).unwrap_err();
    assert_eq!(err.field(), Some("city"));

    let err = schema::parse_update(&json!({"id": "P002"})).unwrap_err();
    assert_eq!(err.field(), Some("id"));
}
