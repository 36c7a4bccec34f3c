//! Badge endpoints: JSON status, SVG image, widget script, force check.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use serde_json::json;
use tracing::debug;
use upbadge_engine::{EngineError, StatusService};
use upbadge_render::{BadgeView, render_badge, widget_js};

use crate::error::ApiError;

/// `GET /v1/{id}.json` (and `GET /api/status/{id}`): the status data record.
pub async fn badge_json(
    service: web::Data<StatusService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let data = service.get_status_data(&path).await?;
    debug!(monitor_id = %data.id, served_from = %data.served_from, "Serving status JSON");
    Ok(HttpResponse::Ok().json(data))
}

/// `GET /v1/{id}.svg`: the badge image.
pub async fn badge_svg(
    service: web::Data<StatusService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let data = service.get_status_data(&path).await?;

    let svg = render_badge(&BadgeView {
        name: &data.config.display_name,
        online: data.status.online,
        response_time_ms: data.status.response_time_ms,
        uptime_percentage: data.uptime.percentage,
        theme: data.config.theme,
    });

    Ok(HttpResponse::Ok()
        .content_type("image/svg+xml; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=60"))
        .body(svg))
}

/// `GET /v1/{id}.js`: the embeddable widget script.
pub async fn badge_widget(
    service: web::Data<StatusService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let config = service
        .lookup(&id)
        .await?
        .ok_or_else(|| ApiError(EngineError::NotFound(id.clone())))?;

    let info = req.connection_info();
    let api_base = format!("{}://{}/v1", info.scheme(), info.host());
    let js = widget_js(&id, &api_base, config.theme);

    Ok(HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=300"))
        .body(js))
}

/// `GET /v1/{id}/check`: synchronous probe bypassing the freshness window.
pub async fn force_check(
    service: web::Data<StatusService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let status = service.force_check(&id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "id": id,
        "status": status,
        "timestamp": Utc::now(),
    })))
}
