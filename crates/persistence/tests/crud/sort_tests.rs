//! Tests for sorted views.

use patienttrack_persistence::error::{QueryError, StorageError};
use patienttrack_persistence::types::{PatientRecord, SortDirective, SortField, SortOrder};

use crate::common::*;

fn ids(records: &[PatientRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

fn three_heights() -> Vec<PatientFixture> {
    vec![
        PatientFixture::new("P001").with_height(170.0),
        PatientFixture::new("P002").with_height(155.5),
        PatientFixture::new("P003").with_height(182.0),
    ]
}

// ============================================================================
// Sort Tests - Ordering
// ============================================================================

/// Test ascending by height.
#[tokio::test]
async fn test_sort_height_asc() {
    let service = memory_service(&three_heights());

    let records = service
        .sorted(SortDirective::new(SortField::Height, SortOrder::Asc))
        .await
        .unwrap();

    assert_eq!(ids(&records), vec!["P002", "P001", "P003"]);
}

/// Test that descending is the exact reverse of ascending when there are no ties.
#[tokio::test]
async fn test_sort_desc_reverses_asc() {
    let service = memory_service(&three_heights());

    let asc = service
        .sorted(SortDirective::new(SortField::Height, SortOrder::Asc))
        .await
        .unwrap();
    let desc = service
        .sorted(SortDirective::new(SortField::Height, SortOrder::Desc))
        .await
        .unwrap();

    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
}

/// Test that sorting by last visit is chronological across months.
#[tokio::test]
async fn test_sort_last_visit_is_chronological() {
    let service = memory_service(&[]);
    service
        .create("A", PatientFixture::new("A").with_last_visit("2024-12-01").patient())
        .await
        .unwrap();
    service
        .create("B", PatientFixture::new("B").with_last_visit("2024-05-03").patient())
        .await
        .unwrap();

    let unpadded = service
        .create("C", PatientFixture::new("C").with_last_visit("2024-5-3").patient())
        .await
        .unwrap_err();
    assert!(matches!(unpadded, StorageError::Validation(_)));

    let records = service
        .sorted(SortDirective::new(SortField::LastVisit, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(ids(&records), vec!["B", "A"]);
}

/// Test that tied records keep traversal order in both directions.
#[tokio::test]
async fn test_sort_ties_keep_traversal_order() {
    let service = memory_service(&[
        PatientFixture::new("P001").with_weight(70.0),
        PatientFixture::new("P002").with_weight(60.0),
        PatientFixture::new("P003").with_weight(70.0),
    ]);

    let asc = service
        .sorted(SortDirective::new(SortField::Weight, SortOrder::Asc))
        .await
        .unwrap();
    let desc = service
        .sorted(SortDirective::new(SortField::Weight, SortOrder::Desc))
        .await
        .unwrap();

    assert_eq!(ids(&asc), vec!["P002", "P001", "P003"]);
    assert_eq!(ids(&desc), vec!["P001", "P003", "P002"]);
}

/// Test ordering by last visit date.
#[tokio::test]
async fn test_sort_last_visit() {
    let service = memory_service(&[
        PatientFixture::new("P001").with_last_visit("2024-05-14"),
        PatientFixture::new("P002").with_last_visit("2023-12-01"),
        PatientFixture::new("P003").with_last_visit("2024-01-30"),
    ]);

    let records = service
        .sorted(SortDirective::parse("last_visit", Some("desc")).unwrap())
        .await
        .unwrap();

    assert_eq!(ids(&records), vec!["P001", "P003", "P002"]);
}

/// Test that sorting an empty collection yields nothing.
#[tokio::test]
async fn test_sort_empty_collection() {
    let service = memory_service(&[]);

    let records = service
        .sorted(SortDirective::new(SortField::Id, SortOrder::Desc))
        .await
        .unwrap();

    assert!(records.is_empty());
}

// ============================================================================
// Sort Tests - Arguments
// ============================================================================

/// Test that sorting by a field outside the allowed set fails.
#[test]
fn test_sort_by_age_is_rejected() {
    let err = SortDirective::parse("age", None).unwrap_err();

    assert!(matches!(err, QueryError::InvalidSortField { ref field, .. } if field == "age"));
    let err: StorageError = err.into();
    assert!(matches!(err, StorageError::Query(_)));
}

/// Test order parsing.
#[test]
fn test_sort_order_parsing() {
    assert_eq!(
        SortDirective::parse("height", None).unwrap().order,
        SortOrder::Asc
    );
    assert!(matches!(
        SortDirective::parse("height", Some("DESC")),
        Err(QueryError::InvalidSortOrder { .. })
    ));
}
