//! Core storage trait and collection operations.
//!
//! - [`CollectionStore`] - whole-collection load/save, implemented by backends
//! - [`query`] - read-by-key and sorted views over a loaded collection
//! - [`mutation`] - create, merge-then-validate update, and delete
//!
//! Query and mutation functions are pure over an in-memory
//! [`PatientCollection`](crate::types::PatientCollection); persisting the
//! result is the caller's job (see [`PatientService`](crate::PatientService)).
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use patienttrack_persistence::core::CollectionStore;
//! use patienttrack_persistence::error::StorageResult;
//! use patienttrack_persistence::types::PatientCollection;
//!
//! struct MyBackend {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl CollectionStore for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn load(&self) -> StorageResult<PatientCollection> {
//!         todo!()
//!     }
//!
//!     async fn save(&self, collection: &PatientCollection) -> StorageResult<()> {
//!         todo!()
//!     }
//! }
//! ```

pub mod mutation;
pub mod query;
pub mod store;

pub use store::CollectionStore;
