//! Core types for the persistence layer.
//!
//! - [`Patient`], [`Gender`] - a stored record and its enum attribute
//! - [`PatientRecord`] - a record paired with its id and derived values
//! - [`PatientUpdate`] - a sparse partial update
//! - [`PatientCollection`] - the full id-keyed collection
//! - [`SortDirective`], [`SortField`], [`SortOrder`] - sorted view arguments
//!
//! # Examples
//!
//! ```
//! use patienttrack_persistence::types::{SortDirective, SortField, SortOrder};
//!
//! let directive = SortDirective::parse("weight", Some("desc")).unwrap();
//! assert_eq!(directive.field, SortField::Weight);
//! assert_eq!(directive.order, SortOrder::Desc);
//!
//! assert!(SortDirective::parse("age", None).is_err());
//! ```

mod collection;
mod patient;
mod sort;
mod update;

pub use collection::PatientCollection;
pub use patient::{Gender, Patient, PatientRecord};
pub use sort::{SortDirective, SortField, SortOrder};
pub use update::PatientUpdate;
