use serde::Serialize;

use crate::brand::BrandId;

/// One entry in a brand's navigation menu.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

// Order is display order.
const POUCH_ECO_NAV: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Shop Pouches", href: "/pouches" },
    NavItem { label: "Sustainability", href: "/sustainability" },
    NavItem { label: "Pricing", href: "/pricing" },
    NavItem { label: "FAQ", href: "/faq" },
    NavItem { label: "Contact", href: "/contact" },
];

const ACHIEVE_PACK_NAV: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Products", href: "/products" },
    NavItem { label: "Industries", href: "/industries" },
    NavItem { label: "Capabilities", href: "/capabilities" },
    NavItem { label: "Request a Quote", href: "/quote" },
    NavItem { label: "Contact", href: "/contact" },
];

/// The ordered navigation menu for a brand.
#[must_use]
pub fn nav_items(brand: BrandId) -> &'static [NavItem] {
    match brand {
        BrandId::PouchEco => POUCH_ECO_NAV,
        BrandId::AchievePack => ACHIEVE_PACK_NAV,
    }
}
