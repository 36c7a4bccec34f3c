//! Route tests over an in-memory service with a scripted prober.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};
use upbadge_core::ProbeOutcome;
use upbadge_engine::StatusService;
use upbadge_probe::Prober;
use upbadge_store::MemoryStore;

use super::configure;

/// Prober that always reports online with a fixed response time.
struct AlwaysOnline;

#[async_trait]
impl Prober for AlwaysOnline {
    async fn probe(&self, _target_url: &str) -> ProbeOutcome {
        ProbeOutcome::responded(true, 200, 20)
    }
}

fn service() -> StatusService {
    StatusService::new(Arc::new(MemoryStore::new()), Arc::new(AlwaysOnline))
}

/// Registers a monitor through the API and yields its id. A macro because
/// the `init_service` app type is unnameable.
macro_rules! register {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/monitors")
            .set_json(json!({"target_url": "https://example.com", "display_name": "Example"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["id"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_create_then_read_status() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let id = register!(app);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/{id}.json"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"]["online"], true);
    assert_eq!(body["uptime"]["percentage"], 100.0);
    assert_eq!(body["config"]["display_name"], "Example");
}

#[actix_web::test]
async fn test_status_alias_matches_v1_route() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let id = register!(app);

    let req = test::TestRequest::get()
        .uri(&format!("/api/status/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_unknown_monitor_is_404() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/v1/zzzzzzzz.json").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_target_is_400() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/monitors")
        .set_json(json!({"target_url": "not a url at all"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_svg_badge_content_type() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let id = register!(app);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/{id}.svg"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("image/svg+xml"));

    let body = test::read_body(resp).await;
    let svg = std::str::from_utf8(&body).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Online"));
}

#[actix_web::test]
async fn test_widget_script_mentions_monitor() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let id = register!(app);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/{id}.js"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let js = std::str::from_utf8(&body).unwrap();
    assert!(js.contains(&id));
}

#[actix_web::test]
async fn test_force_check_returns_outcome() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(configure),
    )
    .await;

    let id = register!(app);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/{id}/check"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["status"]["online"], true);
}
