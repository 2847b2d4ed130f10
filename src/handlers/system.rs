//! Service descriptor and liveness endpoints.

use axum::response::Json;
use serde_json::{json, Value};

/// GET / - service descriptor
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Catalog Search API",
        "version": version,
        "endpoints": {
            "home": "/",
            "healthcheck": "/healthcheck",
            "table_filter": "POST /search/filter/table",
            "dashboard_filter": "POST /search/filter/dashboard",
        }
    }))
}

/// GET /healthcheck - liveness probe
///
/// Reports this layer only; backend reachability is observed per-request
/// through the proxy.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
