//! Health endpoint.

use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

/// `GET /health`: liveness check.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}
