//! Health check endpoint handler.
//!
//! Provides a health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use patienttrack_persistence::core::CollectionStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Loads the collection so an unreadable or corrupt data file is reported
/// as unhealthy.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Store is readable
/// - `503 Service Unavailable` - Store cannot be loaded
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: CollectionStore + 'static,
{
    debug!("Processing health check request");

    let collection = state.service().view().await?;

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.backend_name(),
        "records": collection.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
