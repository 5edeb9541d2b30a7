use serde::Serialize;
use thiserror::Error;

use crate::brand::BrandId;
use crate::registry::Tone;

/// Named copy slots shared by both brand sites. The set is closed: a slot
/// either exists for both brands or it does not exist at all, which is what
/// keeps the two sites from serving duplicate copy to search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKey {
    HeadlineGeneric,
    HomeHero,
    StandUpPouches,
    FlatBottomBags,
    SpoutPouches,
    RecyclableLine,
    ContactCta,
}

impl ContentKey {
    pub const ALL: [ContentKey; 7] = [
        ContentKey::HeadlineGeneric,
        ContentKey::HomeHero,
        ContentKey::StandUpPouches,
        ContentKey::FlatBottomBags,
        ContentKey::SpoutPouches,
        ContentKey::RecyclableLine,
        ContentKey::ContactCta,
    ];

    const fn index(self) -> usize {
        match self {
            ContentKey::HeadlineGeneric => 0,
            ContentKey::HomeHero => 1,
            ContentKey::StandUpPouches => 2,
            ContentKey::FlatBottomBags => 3,
            ContentKey::SpoutPouches => 4,
            ContentKey::RecyclableLine => 5,
            ContentKey::ContactCta => 6,
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            ContentKey::HeadlineGeneric => "headline-generic",
            ContentKey::HomeHero => "home-hero",
            ContentKey::StandUpPouches => "stand-up-pouches",
            ContentKey::FlatBottomBags => "flat-bottom-bags",
            ContentKey::SpoutPouches => "spout-pouches",
            ContentKey::RecyclableLine => "recyclable-line",
            ContentKey::ContactCta => "contact-cta",
        }
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for ContentKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.slug() == s)
            .ok_or_else(|| ContentError::UnknownKey(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    /// Unrecognized slugs fail loudly at the boundary; inside the crate the
    /// key space is a closed enum and lookups cannot miss.
    #[error("unknown content key '{0}'")]
    UnknownKey(String),
    #[error("content key '{key}', brand '{brand}': field '{field}' must be non-empty")]
    EmptyField {
        key: ContentKey,
        brand: BrandId,
        field: &'static str,
    },
    #[error("content key '{key}', brand '{brand}': copy mentions the other brand '{other}'")]
    CrossBrandBleed {
        key: ContentKey,
        brand: BrandId,
        other: &'static str,
    },
}

/// One brand's copy for one slot. All fields required; a lookup never
/// blends fields from both brands.
#[derive(Debug, Clone, Serialize)]
pub struct DomainContent {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub moq: &'static str,
    pub pricing: &'static str,
    pub tone: Tone,
}

/// Per-slot copy variants, indexed `[ContentKey::index()][BrandId::index()]`.
/// The array shape is the parallelism guarantee: a slot cannot be defined
/// for one brand without the other.
static CONTENT: [[DomainContent; 2]; 7] = [
    // headline-generic
    [
        DomainContent {
            headline: "Pouches that love the planet back",
            subheadline: "Compostable stand-up pouches for makers who care \
                          where their packaging ends up.",
            cta: "Get a quick quote",
            moq: "From 100 pouches",
            pricing: "From $0.25 per pouch",
            tone: Tone::Friendly,
        },
        DomainContent {
            headline: "Flexible packaging, manufactured to specification",
            subheadline: "Custom barrier films, print and finishing for food, \
                          beverage and supplement brands at production volume.",
            cta: "Request a consultation",
            moq: "From 10,000 units",
            pricing: "Volume pricing from $0.08 per unit",
            tone: Tone::Professional,
        },
    ],
    // home-hero
    [
        DomainContent {
            headline: "Small-batch pouches, zero-guilt packaging",
            subheadline: "Design online, order from 100 units, and ship your \
                          granola, coffee or soap in pouches that compost.",
            cta: "Browse pouch styles",
            moq: "Start from just 100 pouches",
            pricing: "Small runs from $0.25 per pouch",
            tone: Tone::Friendly,
        },
        DomainContent {
            headline: "Your packaging line's most reliable supplier",
            subheadline: "Audited production, food-grade films and on-time \
                          delivery for brands shipping at scale.",
            cta: "Talk to an engineer",
            moq: "Production runs from 10,000 units",
            pricing: "Tiered volume pricing on request",
            tone: Tone::Professional,
        },
    ],
    // stand-up-pouches
    [
        DomainContent {
            headline: "Stand-up pouches that stand for something",
            subheadline: "Kraft and clear windows, resealable zippers, and a \
                          finish your customers can toss in the compost bin.",
            cta: "Pick a size",
            moq: "100 pouches per design",
            pricing: "From $0.30 per pouch printed",
            tone: Tone::Friendly,
        },
        DomainContent {
            headline: "Stand-up pouches with engineered barrier performance",
            subheadline: "OTR/MVTR-rated laminates, degassing valves and \
                          rollstock options matched to your filling line.",
            cta: "Request barrier specs",
            moq: "10,000 units per SKU",
            pricing: "From $0.09 per unit at volume",
            tone: Tone::Professional,
        },
    ],
    // flat-bottom-bags
    [
        DomainContent {
            headline: "Flat-bottom bags with shelf appeal",
            subheadline: "Five printable panels and a sturdy base, perfect for \
                          coffee beans and pantry staples.",
            cta: "See print options",
            moq: "From 100 bags",
            pricing: "From $0.38 per bag",
            tone: Tone::Friendly,
        },
        DomainContent {
            headline: "Flat-bottom bags for premium retail placement",
            subheadline: "Box-bottom construction with side gussets, tin-tie \
                          or zipper closures, and matte or soft-touch finishes.",
            cta: "Request a dieline",
            moq: "From 10,000 bags",
            pricing: "From $0.12 per bag at volume",
            tone: Tone::Professional,
        },
    ],
    // spout-pouches
    [
        DomainContent {
            headline: "Spout pouches for drinks on the go",
            subheadline: "Lightweight, resealable and kinder to the planet \
                          than bottles for juices, sauces and refills.",
            cta: "Get a sample pack",
            moq: "From 100 pouches",
            pricing: "From $0.45 per pouch",
            tone: Tone::Friendly,
        },
        DomainContent {
            headline: "Spouted packaging for liquid filling lines",
            subheadline: "Center and corner spouts in standard neck sizes, \
                          retort-capable laminates, and cap color matching.",
            cta: "Discuss line compatibility",
            moq: "From 10,000 pouches",
            pricing: "From $0.16 per pouch at volume",
            tone: Tone::Professional,
        },
    ],
    // recyclable-line
    [
        DomainContent {
            headline: "Recyclable mono-material, same great pouch",
            subheadline: "PE and PP mono-films that go in the recycling \
                          stream, not the landfill.",
            cta: "Shop recyclable pouches",
            moq: "From 100 pouches",
            pricing: "From $0.28 per pouch",
            tone: Tone::Friendly,
        },
        DomainContent {
            headline: "Mono-material structures for recyclability targets",
            subheadline: "Certified PE and PP laminates that meet store \
                          drop-off and curbside guidelines without sacrificing \
                          barrier.",
            cta: "Review compliance data",
            moq: "From 10,000 units",
            pricing: "From $0.10 per unit at volume",
            tone: Tone::Professional,
        },
    ],
    // contact-cta
    [
        DomainContent {
            headline: "Questions? We answer fast",
            subheadline: "Message us on WhatsApp and get pouch advice from a \
                          real human, usually within the hour.",
            cta: "Chat with us",
            moq: "No order too small",
            pricing: "Transparent per-pouch pricing",
            tone: Tone::Friendly,
        },
        DomainContent {
            headline: "Speak with a packaging engineer",
            subheadline: "Send your dieline, fill weight and barrier targets \
                          and receive a quotation within one business day.",
            cta: "Request a quotation",
            moq: "MOQs tailored to your forecast",
            pricing: "Itemized quotations per SKU",
            tone: Tone::Professional,
        },
    ],
];

/// Brand-specific copy for a slot. Infallible: both axes are closed enums.
#[must_use]
pub fn content_for(key: ContentKey, brand: BrandId) -> &'static DomainContent {
    &CONTENT[key.index()][brand.index()]
}

/// Check every slot is fully populated for both brands and that neither
/// brand's copy names the other brand. Run by `packsite-cli validate` and at
/// server startup; the same rules are pinned by tests.
///
/// # Errors
///
/// Returns the first [`ContentError`] found.
pub fn validate_content() -> Result<(), ContentError> {
    for key in ContentKey::ALL {
        for brand in BrandId::ALL {
            let content = content_for(key, brand);
            let fields: [(&'static str, &str); 5] = [
                ("headline", content.headline),
                ("subheadline", content.subheadline),
                ("cta", content.cta),
                ("moq", content.moq),
                ("pricing", content.pricing),
            ];
            for (field, value) in fields {
                if value.trim().is_empty() {
                    return Err(ContentError::EmptyField { key, brand, field });
                }
            }

            let other = match brand {
                BrandId::PouchEco => "Achieve Pack",
                BrandId::AchievePack => "Pouch Eco",
            };
            let mentions_other = fields
                .iter()
                .any(|(_, value)| value.contains(other));
            if mentions_other {
                return Err(ContentError::CrossBrandBleed { key, brand, other });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
