//! PatientTrack Persistence Layer
//!
//! This crate stores patient records and answers queries over them. The whole
//! collection is one document keyed by patient id; every mutation is validated
//! against a fixed schema before it is persisted.
//!
//! # Architecture
//!
//! - [`types`] - Patient record, partial update, collection and sort types
//! - [`schema`] - Field constraints and JSON body parsing
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`CollectionStore`] trait plus pure query/mutation functions
//! - [`backends`] - JSON-file and in-memory stores
//! - [`service`] - [`PatientService`], which ties a store to the operations
//!
//! # Quick Start
//!
//! ```no_run
//! use patienttrack_persistence::backends::InMemoryBackend;
//! use patienttrack_persistence::types::{Gender, Patient, SortDirective};
//! use patienttrack_persistence::PatientService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = PatientService::new(InMemoryBackend::new());
//!
//! service
//!     .create(
//!         "P001",
//!         Patient {
//!             name: "Ananya Verma".to_string(),
//!             age: 28,
//!             gender: Gender::Female,
//!             contact: "9876543210".to_string(),
//!             diagnosis: "Hypertension".to_string(),
//!             last_visit: "2024-05-14".to_string(),
//!             height: 165.0,
//!             weight: 90.0,
//!             city: "Guwahati".to_string(),
//!             verdict: "Obese".to_string(),
//!         },
//!     )
//!     .await?;
//!
//! let record = service.read("P001").await?;
//! assert_eq!(record.bmi, 33.06);
//!
//! let by_height = service.sorted(SortDirective::parse("height", Some("desc"))?).await?;
//! assert_eq!(by_height.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod schema;
pub mod service;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use service::PatientService;
pub use types::{
    Gender, Patient, PatientCollection, PatientRecord, PatientUpdate, SortDirective, SortField,
    SortOrder,
};

// Re-export core traits
pub use core::CollectionStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
