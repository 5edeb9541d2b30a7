//! Copy-variant and navigation endpoints, resolved per request host.

use axum::{extract::Path, Extension, Json};
use serde::Serialize;

use packsite_core::{content_for, nav_items, ContentKey, DomainContent, NavItem};

use crate::middleware::{ActiveBrand, RequestId};

use super::{ApiError, ApiResponse, ResponseMeta};

pub(in crate::api) async fn get_content(
    Extension(req_id): Extension<RequestId>,
    Extension(active): Extension<ActiveBrand>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<DomainContent>>, ApiError> {
    let key: ContentKey = key
        .parse()
        .map_err(|e| ApiError::new(req_id.0.clone(), "unknown_content_key", format!("{e}")))?;

    Ok(Json(ApiResponse {
        data: content_for(key, active.brand).clone(),
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct ContentEntry {
    pub key: ContentKey,
    pub content: DomainContent,
}

pub(in crate::api) async fn list_content(
    Extension(req_id): Extension<RequestId>,
    Extension(active): Extension<ActiveBrand>,
) -> Json<ApiResponse<Vec<ContentEntry>>> {
    let data = ContentKey::ALL
        .into_iter()
        .map(|key| ContentEntry {
            key,
            content: content_for(key, active.brand).clone(),
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(in crate::api) async fn get_nav(
    Extension(req_id): Extension<RequestId>,
    Extension(active): Extension<ActiveBrand>,
) -> Json<ApiResponse<Vec<NavItem>>> {
    Json(ApiResponse {
        data: nav_items(active.brand).to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}
