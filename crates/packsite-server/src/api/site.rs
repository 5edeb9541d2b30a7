//! Brand-resolution endpoints: active brand, SEO head payload, contact
//! channels. All of these derive from the `Host` header classified by the
//! `resolve_brand` middleware.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use packsite_core::{page_meta, BrandConfig, BrandId, PageMeta};

use crate::middleware::{ActiveBrand, RequestId};

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(in crate::api) struct BrandResponse {
    pub brand: BrandId,
    pub host: Option<String>,
    pub base_url: String,
    pub config: BrandConfig,
}

pub(in crate::api) async fn get_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(active): Extension<ActiveBrand>,
) -> Json<ApiResponse<BrandResponse>> {
    let ctx = active.host_context();
    let data = BrandResponse {
        brand: active.brand,
        host: active.host.clone(),
        base_url: state.resolver.base_url(active.brand, &ctx),
        config: state.registry.get(active.brand).clone(),
    };

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[derive(Debug, Deserialize)]
pub(in crate::api) struct MetaParams {
    path: Option<String>,
}

pub(in crate::api) async fn get_meta(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(active): Extension<ActiveBrand>,
    Query(params): Query<MetaParams>,
) -> Json<ApiResponse<PageMeta>> {
    let ctx = active.host_context();
    let path = params.path.unwrap_or_else(|| "/".to_string());
    let data = page_meta(
        &state.registry,
        &state.resolver,
        active.brand,
        &ctx,
        &path,
    );

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct ContactResponse {
    pub email: &'static str,
    pub phone: &'static str,
    pub whatsapp_url: &'static str,
}

pub(in crate::api) async fn get_contact(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(active): Extension<ActiveBrand>,
) -> Json<ApiResponse<ContactResponse>> {
    let data = ContactResponse {
        email: state.registry.contact_email(active.brand),
        phone: state.registry.contact_phone(active.brand),
        whatsapp_url: state.registry.whatsapp_url(active.brand),
    };

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
