use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Pinged by an external scheduler so the host does not idle the instance.
pub async fn keep_alive() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": "Server is active." })))
}
