//! Tests for record creation.

use serde_json::json;

use patienttrack_persistence::error::{ResourceError, StorageError, ValidationError};
use patienttrack_persistence::schema;

use crate::common::*;

// ============================================================================
// Create Tests - Basic
// ============================================================================

/// Test that a created record reads back equal.
#[tokio::test]
async fn test_create_then_read_returns_equal_record() {
    let service = memory_service(&[]);
    let fixture = PatientFixture::new("P001");

    service
        .create(&fixture.id, fixture.patient())
        .await
        .expect("Create should succeed");

    let record = service.read("P001").await.expect("Read should succeed");
    assert_eq!(record.id, "P001");
    assert_eq!(record.patient, fixture.patient());
}

/// Test that the returned record carries the derived BMI.
#[tokio::test]
async fn test_create_returns_record_with_bmi() {
    let service = memory_service(&[]);
    let fixture = PatientFixture::new("P001")
        .with_height(165.0)
        .with_weight(90.0);

    let record = service
        .create(&fixture.id, fixture.patient())
        .await
        .unwrap();

    assert_eq!(record.bmi, 33.06);
}

/// Test that creating from a JSON body goes through the same checks.
#[tokio::test]
async fn test_create_from_json_body() {
    let service = memory_service(&[]);
    let body = PatientFixture::new("P042").to_json();

    let (id, patient) = schema::parse_new_patient(&body).expect("Body should parse");
    service.create(&id, patient).await.unwrap();

    assert!(service.view().await.unwrap().contains("P042"));
}

// ============================================================================
// Create Tests - Failures
// ============================================================================

/// Test that a duplicate id is rejected and the existing record is kept.
#[tokio::test]
async fn test_create_duplicate_id_fails() {
    let service = memory_service(&[PatientFixture::new("P001").with_name("Original")]);

    let err = service
        .create("P001", PatientFixture::new("P001").with_name("Impostor").patient())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::AlreadyExists { ref id }) if id == "P001"
    ));
    assert_eq!(service.read("P001").await.unwrap().patient.name, "Original");
    assert_eq!(service.store().save_count(), 0);
}

/// Test that a duplicate create leaves the data file byte-for-byte unchanged.
#[tokio::test]
async fn test_create_duplicate_leaves_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    let service = json_file_service(&path, &[PatientFixture::new("P001")]);
    let before = std::fs::read(&path).unwrap();

    let result = service
        .create("P001", PatientFixture::new("P001").with_age(50).patient())
        .await;

    assert!(result.is_err());
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

/// Test that out-of-range values are rejected before anything is stored.
#[tokio::test]
async fn test_create_invalid_record_fails() {
    let service = memory_service(&[]);

    for (fixture, field) in [
        (PatientFixture::new("P001").with_age(0), "age"),
        (PatientFixture::new("P001").with_age(120), "age"),
        (PatientFixture::new("P001").with_height(0.0), "height"),
        (PatientFixture::new("P001").with_weight(-1.0), "weight"),
        (PatientFixture::new("P001").with_last_visit("14/05/2024"), "last_visit"),
        (PatientFixture::new("P001").with_name(""), "name"),
    ] {
        let err = service
            .create(&fixture.id, fixture.patient())
            .await
            .unwrap_err();
        match err {
            StorageError::Validation(e) => assert_eq!(e.field(), Some(field)),
            other => panic!("expected validation error for {field}, got {other:?}"),
        }
    }

    assert!(service.view().await.unwrap().is_empty());
}

/// Test that a body missing a field names that field.
#[test]
fn test_create_body_missing_field() {
    let mut body = PatientFixture::new("P001").to_json();
    body.as_object_mut().unwrap().remove("gender");

    let err = schema::parse_new_patient(&body).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingRequiredField { ref field } if field == "gender"
    ));
}

/// Test that a wrongly typed field is rejected.
#[test]
fn test_create_body_wrong_type() {
    let mut body = PatientFixture::new("P001").to_json();
    body["age"] = json!("thirty");

    let err = schema::parse_new_patient(&body).unwrap_err();
    assert_eq!(err.field(), Some("age"));
}

/// Test that an unknown gender is rejected.
#[test]
fn test_create_body_unknown_gender() {
    let mut body = PatientFixture::new("P001").to_json();
    body["gender"] = json!("robot");

    let err = schema::parse_new_patient(&body).unwrap_err();
    assert_eq!(err.field(), Some("gender"));
}
