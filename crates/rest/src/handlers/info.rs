//! Service banner endpoints.

use axum::Json;
use serde_json::{Value, json};

/// `GET [base]/`
pub async fn home_handler() -> Json<Value> {
    Json(json!({ "message": "Patient Tract API" }))
}

/// `GET [base]/about`
pub async fn about_handler() -> Json<Value> {
    Json(json!({ "message": "A fully functional API for patient record tracking." }))
}
