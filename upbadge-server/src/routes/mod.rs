//! Typed route table.
//!
//! Routes are declared as (method, path template, handler) entries on the
//! actix service config; no pattern-string-to-regex machinery of our own.

pub mod badge;
pub mod health;
pub mod home;
pub mod monitors;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

/// Registers every route on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public badge endpoints
        .route("/v1/{id}.json", web::get().to(badge::badge_json))
        .route("/v1/{id}.svg", web::get().to(badge::badge_svg))
        .route("/v1/{id}.js", web::get().to(badge::badge_widget))
        .route("/v1/{id}/check", web::get().to(badge::force_check))
        // Aliases and management
        .route("/api/status/{id}", web::get().to(badge::badge_json))
        .route("/api/monitors", web::post().to(monitors::create_monitor))
        // Service endpoints
        .route("/health", web::get().to(health::health))
        .route("/", web::get().to(home::home))
        .default_service(web::to(fallback));
}

/// OPTIONS preflights succeed empty (CORS headers come from middleware);
/// everything else unmatched is a JSON 404.
async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({
            "error": "Not found",
            "status": "error",
        }))
    }
}

#[cfg(test)]
mod route_tests;
