//! Partial update handler.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use patienttrack_persistence::core::CollectionStore;
use patienttrack_persistence::schema;
use serde_json::Value;
use tracing::debug;

use crate::error::RestResult;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Handler for updating a patient.
///
/// Only the fields present in the body change. The merged record is
/// validated as a whole before anything is written.
///
/// # HTTP Request
///
/// `PUT [base]/edit/[id]`
///
/// # Response
///
/// - `200 OK` - Updated
/// - `404 Not Found` - No patient has this id
/// - `422 Unprocessable Entity` - The merged record is invalid, a field is
///   `null`, or the body tries to change the id
///
/// # Example
///
/// ```http
/// PUT /edit/P001 HTTP/1.1
/// Content-Type: application/json
///
/// {"weight": 72.5, "verdict": "Normal"}
/// ```
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RestResult<Json<MessageResponse>>
where
    S: CollectionStore + 'static,
{
    let Json(body) = payload?;
    let changes = schema::parse_update(&body)?;

    debug!(id = %id, fields = ?changes.fields(), "Processing update request");

    state.service().update(&id, &changes).await?;

    Ok(Json(MessageResponse {
        message: "Patient updated successfully",
        id,
    }))
}
