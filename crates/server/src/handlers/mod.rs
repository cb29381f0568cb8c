pub mod health;
pub mod home;

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Handler for requests that match no route.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
