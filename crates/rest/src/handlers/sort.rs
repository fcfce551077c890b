//! Sorted listing handler.

use axum::{
    Json,
    extract::{Query, State},
};
use patienttrack_persistence::core::CollectionStore;
use patienttrack_persistence::{PatientRecord, SortDirective};
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Query parameters for `GET /sort`.
#[derive(Debug, Deserialize)]
pub struct SortParams {
    /// One of `id`, `last_visit`, `height`, `weight`.
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    pub order: Option<String>,
}

/// Handler for the sorted patient list.
///
/// # HTTP Request
///
/// `GET [base]/sort?sort_by=[field]&order=[asc|desc]`
///
/// # Response
///
/// - `200 OK` - Array of records, each with `id` and `bmi`
/// - `400 Bad Request` - Missing or unknown field, or unknown order
pub async fn sort_handler<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<SortParams>,
) -> RestResult<Json<Vec<PatientRecord>>>
where
    S: CollectionStore + 'static,
{
    debug!(sort_by = ?params.sort_by, order = ?params.order, "Processing sort request");

    let field = params.sort_by.as_deref().ok_or_else(|| RestError::BadRequest {
        message: "missing query parameter 'sort_by'".to_string(),
    })?;
    let directive = SortDirective::parse(field, params.order.as_deref())?;

    let records = state.service().sorted(directive).await?;
    Ok(Json(records))
}
