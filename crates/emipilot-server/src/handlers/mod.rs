//! HTTP request handlers organized by domain

pub mod emis;
pub mod income;
pub mod metrics;

pub use emis::*;
pub use income::*;
pub use metrics::*;

use axum::Json;

/// GET /api/health - Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "EMI Pilot API is running"
    }))
}
