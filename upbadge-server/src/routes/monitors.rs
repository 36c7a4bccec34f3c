//! Monitor registration endpoint.

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use tracing::info;
use upbadge_engine::{RegisterRequest, StatusService};

use crate::error::ApiError;

/// `POST /api/monitors`: register a monitor and run its first check.
pub async fn create_monitor(
    service: web::Data<StatusService>,
    body: web::Json<RegisterRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let registered = service.register_monitor(body.into_inner()).await?;

    let info = req.connection_info();
    let origin = format!("{}://{}", info.scheme(), info.host());
    let id = &registered.config.id;
    info!(monitor_id = %id, target_url = %registered.config.target_url, "Monitor created");

    Ok(HttpResponse::Created().json(json!({
        "id": id,
        "embed_url": format!("{origin}/v1/{id}.js"),
        "api_url": format!("{origin}/api/status/{id}"),
        "config": registered.config,
        "initial_status": registered.initial_status,
    })))
}
