//! Mutating operations over an in-memory collection.
//!
//! Every function here is all-or-nothing: on error the collection is left
//! exactly as it was, so the caller can skip persisting it.

use crate::error::{ResourceError, StorageResult};
use crate::schema;
use crate::types::{Patient, PatientCollection, PatientUpdate};

/// Inserts a new record.
///
/// # Errors
///
/// * `StorageError::Resource(AlreadyExists)` - If `id` is already present
/// * `StorageError::Validation` - If the record fails the schema
pub fn create(collection: &mut PatientCollection, id: &str, patient: Patient) -> StorageResult<()> {
    if collection.contains(id) {
        return Err(ResourceError::AlreadyExists { id: id.to_string() }.into());
    }
    schema::validate_patient(id, &patient)?;

    collection.insert(id.to_string(), patient);
    Ok(())
}

/// Applies a partial update to an existing record and returns the new value.
///
/// The merged candidate is built as a copy, validated as if newly created,
/// and substituted only when validation succeeds.
///
/// # Errors
///
/// * `StorageError::Resource(NotFound)` - If `id` is absent
/// * `StorageError::Validation` - If the merged record fails the schema
pub fn update(
    collection: &mut PatientCollection,
    id: &str,
    changes: &PatientUpdate,
) -> StorageResult<Patient> {
    let existing = collection.get(id).ok_or_else(|| ResourceError::NotFound {
        id: id.to_string(),
    })?;

    let merged = changes.apply(existing);
    schema::validate_patient(id, &merged)?;

    collection.insert(id.to_string(), merged.clone());
    Ok(merged)
}

/// Removes a record and returns it.
///
/// # Errors
///
/// * `StorageError::Resource(NotFound)` - If `id` is absent
pub fn delete(collection: &mut PatientCollection, id: &str) -> StorageResult<Patient> {
    collection
        .remove(id)
        .ok_or_else(|| ResourceError::NotFound { id: id.to_string() }.into())
}
