//! CRUD operation tests for patient stores.
//!
//! This module contains tests for create, read, update, delete and sorted
//! views through [`PatientService`](patienttrack_persistence::PatientService),
//! against both the in-memory and JSON-file backends.

pub mod create_tests;
pub mod delete_tests;
pub mod scenario_tests;
pub mod sort_tests;
pub mod update_tests;
