//! Read-only operations over an in-memory collection.

use std::cmp::Ordering;

use crate::error::{ResourceError, StorageResult};
use crate::types::{Patient, PatientCollection, SortDirective, SortField, SortOrder};

/// Looks up a record by exact id.
///
/// # Errors
///
/// * `StorageError::Resource(NotFound)` - If no record has this id
pub fn get_by_key<'a>(collection: &'a PatientCollection, id: &str) -> StorageResult<&'a Patient> {
    collection.get(id).ok_or_else(|| {
        ResourceError::NotFound {
            id: id.to_string(),
        }
        .into()
    })
}

/// Returns every record ordered by `directive`.
///
/// The sort is stable in both directions: records that compare equal keep
/// their collection traversal order. Without ties, descending is the exact
/// reverse of ascending.
pub fn sort_by<'a>(
    collection: &'a PatientCollection,
    directive: SortDirective,
) -> Vec<(&'a str, &'a Patient)> {
    let mut entries: Vec<(&str, &Patient)> = collection
        .iter()
        .map(|(id, patient)| (id.as_str(), patient))
        .collect();

    entries.sort_by(|a, b| {
        let ordering = compare(directive.field, a, b);
        match directive.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    entries
}

/// A comparable view of one sort attribute.
///
/// `Missing` orders below every present value, standing in for the empty
/// string of an untyped store.
#[derive(Debug)]
enum SortKey<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Less,
            (_, SortKey::Missing) => Ordering::Greater,
            // One field never mixes kinds.
            _ => Ordering::Equal,
        }
    }
}

fn sort_key<'a>(field: SortField, id: &'a str, patient: &'a Patient) -> SortKey<'a> {
    match field {
        SortField::Id => SortKey::Text(id),
        SortField::LastVisit if patient.last_visit.is_empty() => SortKey::Missing,
        SortField::LastVisit => SortKey::Text(&patient.last_visit),
        SortField::Height => SortKey::Number(patient.height),
        SortField::Weight => SortKey::Number(patient.weight),
    }
}

fn compare(field: SortField, a: &(&str, &Patient), b: &(&str, &Patient)) -> Ordering {
    sort_key(field, a.0, a.1).compare(&sort_key(field, b.0, b.1))
}
