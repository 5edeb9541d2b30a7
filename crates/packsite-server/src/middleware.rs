use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use packsite_core::{classify_host, BrandId, HostContext};

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// The brand a request resolved to, stored as a request extension so every
/// handler sees the same classification.
#[derive(Debug, Clone)]
pub struct ActiveBrand {
    pub brand: BrandId,
    /// Request hostname with any port stripped; `None` when the request
    /// carried no usable `Host` or `X-Forwarded-Host` header.
    pub host: Option<String>,
    /// Reconstructed ambient origin (scheme + authority). Only consulted by
    /// the URL resolver for local-development hosts.
    pub origin: Option<String>,
}

impl ActiveBrand {
    pub fn host_context(&self) -> HostContext {
        HostContext::new(self.host.clone(), self.origin.clone())
    }
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Axum middleware that classifies the request hostname into a brand.
///
/// `X-Forwarded-Host` (first value) wins over `Host`, since the service sits
/// behind a proxy in production. A request with neither header still gets a
/// valid [`ActiveBrand`] carrying the default brand.
pub async fn resolve_brand(mut req: Request, next: Next) -> Response {
    let authority = request_authority(req.headers());
    let host = authority.as_deref().map(|a| strip_port(a).to_string());
    let brand = classify_host(host.as_deref());
    let origin = authority
        .as_deref()
        .map(|a| format!("{}://{a}", request_scheme(req.headers())));

    tracing::debug!(host = host.as_deref().unwrap_or("<none>"), brand = %brand, "resolved brand");
    req.extensions_mut().insert(ActiveBrand { brand, host, origin });

    next.run(req).await
}

/// The request's authority (host plus optional port), preferring the
/// proxy-forwarded value.
fn request_authority(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-host")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded.or(host).map(ToOwned::to_owned)
}

fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http")
}

/// Drop the port from an authority string. Bracketed IPv6 literals keep
/// their brackets.
fn strip_port(authority: &str) -> &str {
    if authority.starts_with('[') {
        if let Some(end) = authority.find(']') {
            return &authority[..=end];
        }
    }
    authority.split(':').next().unwrap_or(authority)
}
