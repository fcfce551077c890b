//! In-memory backend.
//!
//! Holds the collection in process memory. Useful for tests and for running
//! the server without a data file. Availability can be switched off to
//! exercise storage failure paths.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::CollectionStore;
use crate::error::{BackendError, StorageResult};
use crate::types::PatientCollection;

const BACKEND_NAME: &str = "memory";

/// Process-local patient store.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: RwLock<PatientCollection>,
    saves: AtomicU64,
    unavailable: AtomicBool,
}

impl InMemoryBackend {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `collection`.
    ///
    /// The collection is taken as-is; it is not validated.
    pub fn with_collection(collection: PatientCollection) -> Self {
        Self {
            data: RwLock::new(collection),
            ..Default::default()
        }
    }

    /// Returns a copy of the current contents without going through `load`.
    pub fn snapshot(&self) -> PatientCollection {
        self.data.read().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::SeqCst)
    }

    /// Makes every subsequent load and save fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "store marked unavailable".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionStore for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn load(&self) -> StorageResult<PatientCollection> {
        self.check_available()?;
        Ok(self.data.read().clone())
    }

    async fn save(&self, collection: &PatientCollection) -> StorageResult<()> {
        self.check_available()?;
        *self.data.write() = collection.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
