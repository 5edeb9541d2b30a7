use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use packsite_core::app_config::Environment;
use packsite_core::ContentKey;

use super::*;

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "info".to_string(),
        dev_hosts: vec![],
        cors_origin: "*".to_string(),
    }
}

fn test_app() -> Router {
    build_app(AppState::new(
        Arc::new(test_config()),
        BrandRegistry::builtin(),
        UrlResolver::new(),
    ))
}

async fn get_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

fn get(uri: &str, host: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(host) = host {
        builder = builder.header("host", host);
    }
    builder.body(Body::empty()).expect("request")
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, json) = get_json(test_app(), get("/api/v1/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["tables"], "ok");
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn brand_endpoint_resolves_pouch_eco_hosts() {
    let (status, json) = get_json(
        test_app(),
        get("/api/v1/site/brand", Some("www.pouch.eco")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["brand"], "pouch-eco");
    assert_eq!(json["data"]["config"]["tone"], "friendly");
    assert_eq!(json["data"]["config"]["audience"], "B2C");
    assert_eq!(json["data"]["base_url"], "https://pouch.eco");
}

#[tokio::test]
async fn brand_endpoint_defaults_to_achieve_pack_without_host() {
    let (status, json) = get_json(test_app(), get("/api/v1/site/brand", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["brand"], "achieve-pack");
    assert_eq!(json["data"]["config"]["audience"], "B2B");
    assert_eq!(json["data"]["host"], serde_json::Value::Null);
    assert_eq!(json["data"]["base_url"], "https://achievepack.com");
}

#[tokio::test]
async fn brand_endpoint_prefers_forwarded_host() {
    let request = Request::builder()
        .uri("/api/v1/site/brand")
        .header("host", "internal.lan")
        .header("x-forwarded-host", "staging.pouch.eco")
        .body(Body::empty())
        .expect("request");
    let (status, json) = get_json(test_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["brand"], "pouch-eco");
    assert_eq!(json["data"]["host"], "staging.pouch.eco");
}

#[tokio::test]
async fn meta_canonical_stays_on_the_brand_domain() {
    let (status, json) = get_json(
        test_app(),
        get("/api/v1/site/meta?path=/products", Some("achievepack.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let canonical = json["data"]["canonical"].as_str().expect("canonical");
    assert_eq!(canonical, "https://achievepack.com/products");
    assert_eq!(json["data"]["og_url"], canonical);
    assert!(!canonical.contains("pouch.eco"));
}

#[tokio::test]
async fn meta_on_localhost_uses_the_ambient_origin() {
    let (status, json) = get_json(
        test_app(),
        get("/api/v1/site/meta?path=/", Some("localhost:5173")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["canonical"], "http://localhost:5173");
}

#[tokio::test]
async fn configured_dev_host_uses_forwarded_scheme() {
    let state = AppState::new(
        Arc::new(test_config()),
        BrandRegistry::builtin(),
        UrlResolver::with_extra_dev_hosts(["dev.lan".to_string()]),
    );
    let request = Request::builder()
        .uri("/api/v1/site/meta?path=/pricing")
        .header("host", "dev.lan:8443")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .expect("request");
    let (status, json) = get_json(build_app(state), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["canonical"], "https://dev.lan:8443/pricing");
}

#[tokio::test]
async fn content_variants_differ_by_host() {
    let (_, pouch) = get_json(
        test_app(),
        get("/api/v1/site/content/headline-generic", Some("pouch.eco")),
    )
    .await;
    let (_, achieve) = get_json(
        test_app(),
        get(
            "/api/v1/site/content/headline-generic",
            Some("achievepack.com"),
        ),
    )
    .await;

    let pouch_headline = pouch["data"]["headline"].as_str().expect("headline");
    let achieve_headline = achieve["data"]["headline"].as_str().expect("headline");
    assert_ne!(pouch_headline, achieve_headline);
    assert!(!pouch_headline.contains("Achieve Pack"));
    assert!(!achieve_headline.contains("Pouch Eco"));
    assert_eq!(pouch["data"]["tone"], "friendly");
    assert_eq!(achieve["data"]["tone"], "professional");
}

#[tokio::test]
async fn unknown_content_key_is_a_bad_request() {
    let (status, json) = get_json(
        test_app(),
        get("/api/v1/site/content/hero-nonexistent", Some("pouch.eco")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "unknown_content_key");
}

#[tokio::test]
async fn content_index_lists_every_slot() {
    let (status, json) = get_json(
        test_app(),
        get("/api/v1/site/content", Some("achievepack.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = json["data"].as_array().expect("data array");
    assert_eq!(entries.len(), ContentKey::ALL.len());
    assert!(entries
        .iter()
        .any(|e| e["key"] == "headline-generic"));
}

#[tokio::test]
async fn nav_is_brand_specific_and_ordered() {
    let (_, pouch) = get_json(test_app(), get("/api/v1/site/nav", Some("pouch.eco"))).await;
    let (_, achieve) = get_json(
        test_app(),
        get("/api/v1/site/nav", Some("achievepack.com")),
    )
    .await;

    let pouch_items = pouch["data"].as_array().expect("data array");
    let achieve_items = achieve["data"].as_array().expect("data array");
    assert_eq!(pouch_items[0]["href"], "/");
    assert_eq!(achieve_items[0]["href"], "/");
    assert!(pouch_items
        .iter()
        .any(|i| i["href"] == "/sustainability"));
    assert!(achieve_items.iter().any(|i| i["href"] == "/quote"));
    assert!(!achieve_items
        .iter()
        .any(|i| i["href"] == "/sustainability"));
}

#[tokio::test]
async fn contact_returns_the_active_brand_channels() {
    let (status, json) = get_json(
        test_app(),
        get("/api/v1/site/contact", Some("www.pouch.eco")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["email"], "hello@pouch.eco");
    assert!(json["data"]["whatsapp_url"]
        .as_str()
        .expect("whatsapp_url")
        .starts_with("https://wa.me/"));
}

#[tokio::test]
async fn responses_carry_a_request_id_header() {
    let response = test_app()
        .oneshot(get("/api/v1/health", None))
        .await
        .expect("response");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .header("x-request-id", "req-test-42")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(
        response.headers().get("x-request-id"),
        Some(&axum::http::HeaderValue::from_static("req-test-42"))
    );
}

#[tokio::test]
async fn api_error_unknown_key_maps_to_bad_request() {
    let response = ApiError::new("req-1", "unknown_content_key", "unknown content key 'x'")
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
