use crate::brand::{classify_host, BrandId};

/// Request-scoped host information, supplied explicitly by the calling layer
/// (HTTP handler, CLI, test) rather than read from ambient globals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    /// Hostname with any port stripped, e.g. `www.pouch.eco`. `None` when the
    /// execution context has no request-bound hostname.
    pub host: Option<String>,
    /// Full ambient origin including scheme and port, e.g.
    /// `http://localhost:5173`. Only consulted for local-development hosts.
    pub origin: Option<String>,
}

impl HostContext {
    #[must_use]
    pub fn new(host: Option<String>, origin: Option<String>) -> Self {
        Self { host, origin }
    }

    #[must_use]
    pub fn from_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            origin: None,
        }
    }

    /// The brand this context resolves to.
    #[must_use]
    pub fn brand(&self) -> BrandId {
        classify_host(self.host.as_deref())
    }
}

/// Hosts that always count as local development, regardless of configuration.
const BUILTIN_DEV_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

const fn production_origin(brand: BrandId) -> &'static str {
    match brand {
        BrandId::PouchEco => "https://pouch.eco",
        BrandId::AchievePack => "https://achievepack.com",
    }
}

/// Computes canonical/base URLs for the active brand.
///
/// This is the single choke point that keeps one brand's production origin
/// out of the other brand's pages: canonical and Open Graph URLs that cross
/// domains would make search engines treat the two sites as duplicates.
#[derive(Debug, Clone, Default)]
pub struct UrlResolver {
    extra_dev_hosts: Vec<String>,
}

impl UrlResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the built-in local-development markers with deploy-specific
    /// hosts (e.g. a LAN IP), typically sourced from `PACKSITE_DEV_HOSTS`.
    #[must_use]
    pub fn with_extra_dev_hosts(extra: impl IntoIterator<Item = String>) -> Self {
        Self {
            extra_dev_hosts: extra.into_iter().collect(),
        }
    }

    fn is_dev_host(&self, host: &str) -> bool {
        BUILTIN_DEV_HOSTS.iter().any(|dev| *dev == host)
            || self.extra_dev_hosts.iter().any(|dev| dev == host)
    }

    /// The canonical base URL for `brand` under `ctx`.
    ///
    /// On a local-development host with a known ambient origin, returns that
    /// origin verbatim (trailing slash stripped) so generated links never
    /// point local testing at production. In every other case, including the
    /// no-hostname server-render path, returns the brand's fixed production
    /// origin. The result is always an absolute URL with no trailing path.
    #[must_use]
    pub fn base_url(&self, brand: BrandId, ctx: &HostContext) -> String {
        if let Some(host) = ctx.host.as_deref() {
            if self.is_dev_host(host) {
                if let Some(origin) = ctx.origin.as_deref() {
                    return origin.trim_end_matches('/').to_string();
                }
            }
        }
        production_origin(brand).to_string()
    }

    /// Base URL joined with a page path, normalized to a single separating
    /// slash. An empty or root path yields the bare origin.
    #[must_use]
    pub fn canonical_url(&self, brand: BrandId, ctx: &HostContext, path: &str) -> String {
        let base = self.base_url(brand, ctx);
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            base
        } else {
            format!("{base}/{trimmed}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_hosts_get_their_own_origin() {
        let resolver = UrlResolver::new();
        let pouch = resolver.base_url(BrandId::PouchEco, &HostContext::from_host("www.pouch.eco"));
        let achieve = resolver.base_url(
            BrandId::AchievePack,
            &HostContext::from_host("achievepack.com"),
        );
        assert_eq!(pouch, "https://pouch.eco");
        assert_eq!(achieve, "https://achievepack.com");
    }

    #[test]
    fn origins_never_cross_brands() {
        let resolver = UrlResolver::new();
        for host in ["pouch.eco", "achievepack.com", "unknown.example", ""] {
            let ctx = HostContext::from_host(host);
            assert!(!resolver
                .base_url(BrandId::PouchEco, &ctx)
                .contains("achievepack.com"));
            assert!(!resolver
                .base_url(BrandId::AchievePack, &ctx)
                .contains("pouch.eco"));
        }
    }

    #[test]
    fn missing_host_context_yields_production_origin() {
        let resolver = UrlResolver::new();
        let ctx = HostContext::default();
        assert_eq!(
            resolver.base_url(BrandId::AchievePack, &ctx),
            "https://achievepack.com"
        );
    }

    #[test]
    fn dev_host_returns_ambient_origin_verbatim() {
        let resolver = UrlResolver::new();
        let ctx = HostContext::new(
            Some("localhost".to_string()),
            Some("http://localhost:5173".to_string()),
        );
        assert_eq!(
            resolver.base_url(BrandId::PouchEco, &ctx),
            "http://localhost:5173"
        );
        assert_eq!(
            resolver.base_url(BrandId::AchievePack, &ctx),
            "http://localhost:5173"
        );
    }

    #[test]
    fn dev_host_without_origin_falls_back_to_production() {
        let resolver = UrlResolver::new();
        let ctx = HostContext::from_host("127.0.0.1");
        assert_eq!(
            resolver.base_url(BrandId::AchievePack, &ctx),
            "https://achievepack.com"
        );
    }

    #[test]
    fn configured_extra_dev_hosts_are_honored() {
        let resolver = UrlResolver::with_extra_dev_hosts(["192.168.1.20".to_string()]);
        let ctx = HostContext::new(
            Some("192.168.1.20".to_string()),
            Some("http://192.168.1.20:8080/".to_string()),
        );
        assert_eq!(
            resolver.base_url(BrandId::PouchEco, &ctx),
            "http://192.168.1.20:8080"
        );
    }

    #[test]
    fn dev_markers_require_exact_host_match() {
        let resolver = UrlResolver::new();
        // Contains "localhost" but is not a local host.
        let ctx = HostContext::from_host("localhost.evil.example");
        assert_eq!(
            resolver.base_url(BrandId::AchievePack, &ctx),
            "https://achievepack.com"
        );
    }

    #[test]
    fn canonical_url_normalizes_the_joining_slash() {
        let resolver = UrlResolver::new();
        let ctx = HostContext::from_host("pouch.eco");
        assert_eq!(
            resolver.canonical_url(BrandId::PouchEco, &ctx, "/pouches/"),
            "https://pouch.eco/pouches"
        );
        assert_eq!(
            resolver.canonical_url(BrandId::PouchEco, &ctx, "pouches/stand-up"),
            "https://pouch.eco/pouches/stand-up"
        );
        assert_eq!(
            resolver.canonical_url(BrandId::PouchEco, &ctx, "/"),
            "https://pouch.eco"
        );
        assert_eq!(
            resolver.canonical_url(BrandId::PouchEco, &ctx, ""),
            "https://pouch.eco"
        );
    }
}
