use serde::Serialize;
use thiserror::Error;

use crate::brand::BrandId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Friendly,
    Professional,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Friendly => write!(f, "friendly"),
            Tone::Professional => write!(f, "professional"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Audience {
    #[serde(rename = "B2C")]
    B2c,
    #[serde(rename = "B2B")]
    B2b,
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Audience::B2c => write!(f, "B2C"),
            Audience::B2b => write!(f, "B2B"),
        }
    }
}

/// Full per-brand configuration record. Every field is required; the
/// registry is total over [`BrandId`], so page-level consumers never see
/// a partial config.
#[derive(Debug, Clone, Serialize)]
pub struct BrandConfig {
    pub name: &'static str,
    pub domain: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub logo_path: &'static str,
    pub icon_path: &'static str,
    pub color_primary: &'static str,
    pub color_secondary: &'static str,
    pub color_accent: &'static str,
    pub tone: Tone,
    pub audience: Audience,
    pub tagline: &'static str,
    pub description: &'static str,
    pub moq_message: &'static str,
    pub price_range_message: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub whatsapp_url: &'static str,
}

const POUCH_ECO: BrandConfig = BrandConfig {
    name: "Pouch Eco",
    domain: "pouch.eco",
    email: "hello@pouch.eco",
    phone: "+852 5588 7766",
    logo_path: "/images/brand/pouch-eco-logo.svg",
    icon_path: "/images/brand/pouch-eco-icon.svg",
    color_primary: "#2f855a",
    color_secondary: "#f0fff4",
    color_accent: "#f6ad55",
    tone: Tone::Friendly,
    audience: Audience::B2c,
    tagline: "Eco-friendly pouches, no warehouse required",
    description: "Compostable and recyclable stand-up pouches for small-batch \
                  makers. Order from 100 units, print your own design, and ship \
                  plastic-free without minimums that bury your margins.",
    moq_message: "Start from just 100 pouches",
    price_range_message: "From $0.25 per pouch on small runs",
    cta_primary: "Get a quick quote",
    cta_secondary: "Browse pouch styles",
    whatsapp_url: "https://wa.me/85255887766",
};

const ACHIEVE_PACK: BrandConfig = BrandConfig {
    name: "Achieve Pack",
    domain: "achievepack.com",
    email: "sales@achievepack.com",
    phone: "+852 3188 9022",
    logo_path: "/images/brand/achieve-pack-logo.svg",
    icon_path: "/images/brand/achieve-pack-icon.svg",
    color_primary: "#1a365d",
    color_secondary: "#edf2f7",
    color_accent: "#3182ce",
    tone: Tone::Professional,
    audience: Audience::B2b,
    tagline: "Flexible packaging engineered for your supply chain",
    description: "Custom printed stand-up pouches, flat-bottom bags and spout \
                  pouches manufactured to food-grade and barrier specifications, \
                  with structural engineering support and audited QC on every \
                  production run.",
    moq_message: "Production runs from 10,000 units",
    price_range_message: "Volume pricing from $0.08 per unit",
    cta_primary: "Request a consultation",
    cta_secondary: "Download spec sheets",
    whatsapp_url: "https://wa.me/85231889022",
};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("brand '{brand}': field '{field}' must be non-empty")]
    EmptyField { brand: BrandId, field: &'static str },
    #[error("brand '{brand}': field '{field}' has invalid color '{value}'; expected #rrggbb")]
    InvalidColor {
        brand: BrandId,
        field: &'static str,
        value: String,
    },
    #[error("brand '{brand}': field '{field}' must be an absolute https URL, got '{value}'")]
    InvalidUrl {
        brand: BrandId,
        field: &'static str,
        value: String,
    },
    #[error("brand '{brand}': tone '{tone}' does not match audience '{audience}'")]
    ToneMismatch {
        brand: BrandId,
        tone: Tone,
        audience: Audience,
    },
}

/// Static table of brand configuration records, built once and never mutated.
///
/// Constructed explicitly and passed to whatever needs it (router state, CLI)
/// instead of living as ambient module-level state, so tests can fabricate
/// hostnames against a plain value.
#[derive(Debug, Clone)]
pub struct BrandRegistry {
    configs: [BrandConfig; 2],
}

impl Default for BrandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BrandRegistry {
    /// The built-in dual-brand table.
    #[must_use]
    pub const fn builtin() -> Self {
        // Order must match BrandId::index.
        Self {
            configs: [POUCH_ECO, ACHIEVE_PACK],
        }
    }

    /// Look up the full configuration for a brand. Infallible: the table is
    /// indexed by the closed [`BrandId`] enum.
    #[must_use]
    pub fn get(&self, brand: BrandId) -> &BrandConfig {
        &self.configs[brand.index()]
    }

    #[must_use]
    pub fn contact_email(&self, brand: BrandId) -> &'static str {
        self.get(brand).email
    }

    #[must_use]
    pub fn contact_phone(&self, brand: BrandId) -> &'static str {
        self.get(brand).phone
    }

    #[must_use]
    pub fn whatsapp_url(&self, brand: BrandId) -> &'static str {
        self.get(brand).whatsapp_url
    }

    /// Check that every record is fully populated and internally coherent.
    ///
    /// Run at server startup and by `packsite-cli validate`; the same rules
    /// are pinned by tests so a half-filled record cannot reach production.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] found.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for brand in BrandId::ALL {
            validate_config(brand, self.get(brand))?;
        }
        Ok(())
    }
}

fn validate_config(brand: BrandId, config: &BrandConfig) -> Result<(), RegistryError> {
    let text_fields: [(&'static str, &str); 12] = [
        ("name", config.name),
        ("domain", config.domain),
        ("email", config.email),
        ("phone", config.phone),
        ("logo_path", config.logo_path),
        ("icon_path", config.icon_path),
        ("tagline", config.tagline),
        ("description", config.description),
        ("moq_message", config.moq_message),
        ("price_range_message", config.price_range_message),
        ("cta_primary", config.cta_primary),
        ("cta_secondary", config.cta_secondary),
    ];
    for (field, value) in text_fields {
        if value.trim().is_empty() {
            return Err(RegistryError::EmptyField { brand, field });
        }
    }

    let colors: [(&'static str, &str); 3] = [
        ("color_primary", config.color_primary),
        ("color_secondary", config.color_secondary),
        ("color_accent", config.color_accent),
    ];
    for (field, value) in colors {
        if !is_hex_color(value) {
            return Err(RegistryError::InvalidColor {
                brand,
                field,
                value: value.to_string(),
            });
        }
    }

    if !config.whatsapp_url.starts_with("https://") {
        return Err(RegistryError::InvalidUrl {
            brand,
            field: "whatsapp_url",
            value: config.whatsapp_url.to_string(),
        });
    }

    // The two positionings are tone-coupled: a consumer storefront speaks
    // casually, a wholesale one does not.
    let coherent = matches!(
        (config.tone, config.audience),
        (Tone::Friendly, Audience::B2c) | (Tone::Professional, Audience::B2b)
    );
    if !coherent {
        return Err(RegistryError::ToneMismatch {
            brand,
            tone: config.tone,
            audience: config.audience,
        });
    }

    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
