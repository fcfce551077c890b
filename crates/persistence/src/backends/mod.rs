//! Storage backend implementations.
//!
//! # Available Backends
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`JsonFileBackend`] | One JSON document on disk, replaced atomically on save |
//! | [`InMemoryBackend`] | Process memory only, for tests and ephemeral runs |
//!
//! # Example
//!
//! ```no_run
//! use patienttrack_persistence::backends::{JsonFileBackend, JsonFileBackendConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Use an existing data file
//! let backend = JsonFileBackend::open("patients.json")?;
//!
//! // Or create it on first start
//! let backend = JsonFileBackend::with_config(
//!     "./data/patients.json",
//!     JsonFileBackendConfig {
//!         create_if_missing: true,
//!         ..Default::default()
//!     },
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod json_file;
pub mod memory;

pub use json_file::{JsonFileBackend, JsonFileBackendConfig};
pub use memory::InMemoryBackend;
