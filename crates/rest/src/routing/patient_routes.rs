//! Patient route configuration.
//!
//! Defines all routes for the PatientTrack API.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use patienttrack_persistence::core::CollectionStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Banner
/// - `GET /about` - Description
/// - `GET /health` - Health check
///
/// ## Reads
/// - `GET /view` - Whole collection
/// - `GET /patient/{id}` - Read one patient
/// - `GET /sort?sort_by=..&order=..` - Sorted list
///
/// ## Writes
/// - `POST /create` - Create
/// - `PUT /edit/{id}` - Partial update
/// - `DELETE /delete/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: CollectionStore + 'static,
{
    Router::new()
        // Service routes
        .route("/", get(handlers::home_handler))
        .route("/about", get(handlers::about_handler))
        .route("/health", get(handlers::health_handler::<S>))
        // Read routes
        .route("/view", get(handlers::view_handler::<S>))
        .route("/patient/{id}", get(handlers::read_handler::<S>))
        .route("/sort", get(handlers::sort_handler::<S>))
        // Write routes
        .route("/create", post(handlers::create_handler::<S>))
        .route("/edit/{id}", put(handlers::update_handler::<S>))
        .route("/delete/{id}", delete(handlers::delete_handler::<S>))
        // State
        .with_state(state)
}
