//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// GET /health — liveness check. Always `{"status": "ok"}` while the
/// process can execute handler code; readiness probing is out of scope.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
    }))
}
