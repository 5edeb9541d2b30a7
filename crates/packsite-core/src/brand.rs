use serde::{Deserialize, Serialize};

/// Identifies one of the two storefront brands served from this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrandId {
    /// `pouch.eco`, the direct-to-consumer storefront.
    PouchEco,
    /// `achievepack.com`, the wholesale/B2B storefront.
    AchievePack,
}

/// The brand served when the hostname is unknown or absent.
///
/// Server-side rendering without a request-bound hostname must produce the
/// B2B markup, so this default is part of the contract, not a convenience.
pub const DEFAULT_BRAND: BrandId = BrandId::AchievePack;

/// Hostname fragments that select the B2C brand, checked with case-sensitive
/// substring containment. The hyphenated variant covers local and staging
/// hosts like `pouch-eco.pages.dev`. Adding a brand means adding a table here.
const POUCH_ECO_HOST_FRAGMENTS: &[&str] = &["pouch.eco", "pouch-eco"];

impl BrandId {
    pub const ALL: [BrandId; 2] = [BrandId::PouchEco, BrandId::AchievePack];

    /// Stable index into per-brand tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            BrandId::PouchEco => 0,
            BrandId::AchievePack => 1,
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            BrandId::PouchEco => "pouch-eco",
            BrandId::AchievePack => "achieve-pack",
        }
    }

    /// Parse a brand slug as printed by [`BrandId::slug`].
    #[must_use]
    pub fn parse_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.slug() == s)
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Map a request hostname to the brand it belongs to.
///
/// Total over all inputs: any hostname containing one of the B2C fragments
/// resolves to [`BrandId::PouchEco`]; everything else, including `None` and
/// the empty string, resolves to [`DEFAULT_BRAND`].
#[must_use]
pub fn classify_host(host: Option<&str>) -> BrandId {
    match host {
        Some(host)
            if POUCH_ECO_HOST_FRAGMENTS
                .iter()
                .any(|fragment| host.contains(fragment)) =>
        {
            BrandId::PouchEco
        }
        _ => DEFAULT_BRAND,
    }
}
