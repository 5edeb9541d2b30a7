use serde::Serialize;

use crate::brand::BrandId;
use crate::registry::BrandRegistry;
use crate::urls::{HostContext, UrlResolver};

/// SEO head payload for one page render: title, description, and the
/// canonical/Open Graph URLs that must stay on the active brand's domain.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_site_name: String,
    pub og_url: String,
}

/// Assemble the head payload for `path` under the active brand.
#[must_use]
pub fn page_meta(
    registry: &BrandRegistry,
    resolver: &UrlResolver,
    brand: BrandId,
    ctx: &HostContext,
    path: &str,
) -> PageMeta {
    let config = registry.get(brand);
    let canonical = resolver.canonical_url(brand, ctx, path);
    PageMeta {
        title: format!("{} | {}", config.name, config.tagline),
        description: config.description.to_string(),
        og_site_name: config.name.to_string(),
        og_url: canonical.clone(),
        canonical,
    }
}
