//! Patient service: the store-backed entry point for every operation.
//!
//! Each call loads the collection from the store. Mutations run inside a
//! single critical section that covers load, mutate and save, so concurrent
//! writers cannot lose each other's changes. A failed mutation never reaches
//! `save`, which leaves the persisted document untouched.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::core::{CollectionStore, mutation, query};
use crate::error::StorageResult;
use crate::schema;
use crate::types::{Patient, PatientCollection, PatientRecord, PatientUpdate, SortDirective};

/// Patient operations over a [`CollectionStore`].
#[derive(Debug)]
pub struct PatientService<S: CollectionStore> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: CollectionStore> PatientService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S) -> Self {
        Self::from_arc(Arc::new(store))
    }

    /// Creates a service over a shared store.
    pub fn from_arc(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns the backend name, for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Returns the whole collection.
    pub async fn view(&self) -> StorageResult<PatientCollection> {
        self.store.load().await
    }

    /// Returns one record with its id and derived values.
    pub async fn read(&self, id: &str) -> StorageResult<PatientRecord> {
        let collection = self.store.load().await?;
        let patient = query::get_by_key(&collection, id)?;
        Ok(PatientRecord::new(id, patient.clone()))
    }

    /// Returns every record ordered by `directive`.
    pub async fn sorted(&self, directive: SortDirective) -> StorageResult<Vec<PatientRecord>> {
        let collection = self.store.load().await?;
        debug!(
            field = %directive.field,
            order = %directive.order,
            records = collection.len(),
            "Sorting patients"
        );
        Ok(query::sort_by(&collection, directive)
            .into_iter()
            .map(|(id, patient)| PatientRecord::new(id, patient.clone()))
            .collect())
    }

    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - If `id` or the record fails the schema
    /// * `StorageError::Resource(AlreadyExists)` - If `id` is taken
    /// * `StorageError::Backend` - If the store cannot be read or written
    pub async fn create(&self, id: &str, patient: Patient) -> StorageResult<PatientRecord> {
        schema::validate_id(id)?;

        let _guard = self.write_lock.lock().await;
        let mut collection = self.store.load().await?;

        if let Err(e) = mutation::create(&mut collection, id, patient.clone()) {
            warn!(id = %id, error = %e, "Create rejected");
            return Err(e);
        }
        self.store.save(&collection).await?;

        info!(id = %id, backend = self.backend_name(), "Created patient");
        Ok(PatientRecord::new(id, patient))
    }

    /// Applies a partial update and returns the stored result.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If `id` is absent
    /// * `StorageError::Validation` - If the merged record fails the schema
    /// * `StorageError::Backend` - If the store cannot be read or written
    pub async fn update(&self, id: &str, changes: &PatientUpdate) -> StorageResult<PatientRecord> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.store.load().await?;

        if changes.is_empty() {
            let current = query::get_by_key(&collection, id)?;
            debug!(id = %id, "Empty update, nothing to save");
            return Ok(PatientRecord::new(id, current.clone()));
        }

        let updated = match mutation::update(&mut collection, id, changes) {
            Ok(updated) => updated,
            Err(e) => {
                warn!(id = %id, error = %e, "Update rejected");
                return Err(e);
            }
        };
        self.store.save(&collection).await?;

        info!(id = %id, fields = ?changes.fields(), "Updated patient");
        Ok(PatientRecord::new(id, updated))
    }

    /// Removes a record and returns what was stored.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If `id` is absent
    /// * `StorageError::Backend` - If the store cannot be read or written
    pub async fn delete(&self, id: &str) -> StorageResult<PatientRecord> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.store.load().await?;

        let removed = mutation::delete(&mut collection, id)?;
        self.store.save(&collection).await?;

        info!(id = %id, "Deleted patient");
        Ok(PatientRecord::new(id, removed))
    }
}
