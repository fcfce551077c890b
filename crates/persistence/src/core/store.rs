//! Collection store trait.
//!
//! This module defines the [`CollectionStore`] trait: whole-collection load and
//! save against a backing store. There is no incremental read or write.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::PatientCollection;

/// Whole-collection access to persistent storage.
///
/// Every operation on the patient service starts with [`load`](Self::load);
/// writes finish with [`save`](Self::save) of the complete collection.
///
/// # Atomicity
///
/// `save` must be atomic from the caller's point of view: a concurrent or
/// subsequent `load` observes either the previous collection or the new one,
/// never a partially written document.
///
/// # Example
///
/// ```ignore
/// use patienttrack_persistence::core::CollectionStore;
///
/// async fn count<S: CollectionStore>(store: &S) -> StorageResult<usize> {
///     Ok(store.load().await?.len())
/// }
/// ```
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Loads the entire collection.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - If the store is missing, unreadable, or holds
    ///   data that is not a valid patient collection
    async fn load(&self) -> StorageResult<PatientCollection>;

    /// Replaces the persisted collection with `collection`.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - If the write fails; the previous collection
    ///   stays in place
    async fn save(&self, collection: &PatientCollection) -> StorageResult<()>;
}
