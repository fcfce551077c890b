//! Delete handler.

use axum::{
    Json,
    extract::{Path, State},
};
use patienttrack_persistence::core::CollectionStore;
use tracing::debug;

use crate::error::RestResult;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Handler for deleting a patient.
///
/// # HTTP Request
///
/// `DELETE [base]/delete/[id]`
///
/// # Response
///
/// - `200 OK` - Deleted
/// - `404 Not Found` - No patient has this id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<MessageResponse>>
where
    S: CollectionStore + 'static,
{
    debug!(id = %id, "Processing delete request");

    state.service().delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "Patient deleted successfully",
        id,
    }))
}
