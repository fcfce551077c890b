//! Read-by-id handler.

use axum::{
    Json,
    extract::{Path, State},
};
use patienttrack_persistence::PatientRecord;
use patienttrack_persistence::core::CollectionStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for reading one patient.
///
/// # HTTP Request
///
/// `GET [base]/patient/[id]`
///
/// # Response
///
/// - `200 OK` - The record with its `id` and derived `bmi`
/// - `404 Not Found` - No patient has this id
///
/// # Example
///
/// ```http
/// GET /patient/P001 HTTP/1.1
/// Host: localhost:8000
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<PatientRecord>>
where
    S: CollectionStore + 'static,
{
    debug!(id = %id, "Processing read request");

    let record = state.service().read(&id).await?;
    Ok(Json(record))
}
