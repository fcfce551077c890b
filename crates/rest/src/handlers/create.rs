//! Create handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use patienttrack_persistence::core::CollectionStore;
use patienttrack_persistence::schema;
use serde_json::Value;
use tracing::debug;

use crate::error::RestResult;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Handler for creating a patient.
///
/// The body carries the id and all ten record fields.
///
/// # HTTP Request
///
/// `POST [base]/create`
///
/// # Response
///
/// - `201 Created` - Stored; `Location` points at `/patient/[id]`
/// - `409 Conflict` - The id is taken
/// - `422 Unprocessable Entity` - A field is missing, mistyped or out of range
///
/// # Example
///
/// ```http
/// POST /create HTTP/1.1
/// Content-Type: application/json
///
/// {"id": "P006", "name": "Meera Iyer", "age": 52, "gender": "female", ...}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RestResult<Response>
where
    S: CollectionStore + 'static,
{
    let Json(body) = payload?;
    let (id, patient) = schema::parse_new_patient(&body)?;

    debug!(id = %id, "Processing create request");

    state.service().create(&id, patient).await?;

    let location = format!("/patient/{}", id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(MessageResponse {
            message: "Patient created successfully",
            id,
        }),
    )
        .into_response())
}
