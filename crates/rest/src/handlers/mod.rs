//! HTTP request handlers for patient operations.
//!
//! - [`info`] - Service banner and description
//! - [`health`] - Health check endpoint
//! - [`view`] - The whole collection
//! - [`read`] - Read a patient by id
//! - [`sort`] - Sorted patient list
//! - [`create`] - Create a new patient
//! - [`update`] - Partially update a patient
//! - [`delete`] - Delete a patient

use serde::Serialize;

pub mod create;
pub mod delete;
pub mod health;
pub mod info;
pub mod read;
pub mod sort;
pub mod update;
pub mod view;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use info::{about_handler, home_handler};
pub use read::read_handler;
pub use sort::sort_handler;
pub use update::update_handler;
pub use view::view_handler;

/// Acknowledgement body returned by write operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: &'static str,
    /// The affected patient id.
    pub id: String,
}
