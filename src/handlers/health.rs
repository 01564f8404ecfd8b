use axum::Json;
use serde_json::{json, Value};

/// Plain-text liveness banner at the root path.
pub async fn index() -> &'static str {
    "Pet grooming booking service is running"
}

/// Liveness only; does not probe the store.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
