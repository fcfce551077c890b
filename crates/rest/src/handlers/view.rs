//! Whole-collection view handler.

use axum::{Json, extract::State};
use patienttrack_persistence::PatientCollection;
use patienttrack_persistence::core::CollectionStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Returns every stored patient keyed by id, exactly as persisted.
///
/// # HTTP Request
///
/// `GET [base]/view`
///
/// # Response
///
/// - `200 OK` - `{"P001": {...}, "P002": {...}}`
/// - `503 Service Unavailable` - Store cannot be loaded
pub async fn view_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<PatientCollection>>
where
    S: CollectionStore + 'static,
{
    let collection = state.service().view().await?;
    debug!(records = collection.len(), "Returning patient collection");
    Ok(Json(collection))
}
