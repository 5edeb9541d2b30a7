mod content;
mod site;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use packsite_core::{content::validate_content, AppConfig, BrandRegistry, UrlResolver};

use crate::middleware::{request_id, resolve_brand, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registry: Arc<BrandRegistry>,
    pub resolver: Arc<UrlResolver>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>, registry: BrandRegistry, resolver: UrlResolver) -> Self {
        Self {
            config,
            registry: Arc::new(registry),
            resolver: Arc::new(resolver),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    tables: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "unknown_content_key" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ]);

    if origin == "*" {
        return layer.allow_origin(tower_http::cors::Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!(origin, "invalid PACKSITE_CORS_ORIGIN, allowing any origin");
            layer.allow_origin(tower_http::cors::Any)
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    let cors = build_cors(&state.config.cors_origin);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/site/brand", get(site::get_brand))
        .route("/api/v1/site/meta", get(site::get_meta))
        .route("/api/v1/site/contact", get(site::get_contact))
        .route("/api/v1/site/content", get(content::list_content))
        .route("/api/v1/site/content/{key}", get(content::get_content))
        .route("/api/v1/site/nav", get(content::get_nav))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum::middleware::from_fn(request_id))
                .layer(axum::middleware::from_fn(resolve_brand)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    let tables_ok = state.registry.validate().is_ok() && validate_content().is_ok();
    if tables_ok {
        (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    tables: "ok",
                },
                meta,
            }),
        )
    } else {
        tracing::warn!("health check: brand tables failed validation");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                data: HealthData {
                    status: "degraded",
                    tables: "invalid",
                },
                meta,
            }),
        )
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
