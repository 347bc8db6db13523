//! Recommendation Filter/Composer
//!
//! Layers partner listings over the host's static recommendations.
//!
//! - **Premium** (`global: true`): shown in every zone, filtered by category only.
//! - **Basic** (`global: false`): shown only in the zones listed on the partner.
//!   With no resolved zone no basic partner is shown.
//! - **Spotlight**: the host's explicit featured item if there is one, otherwise
//!   the first premium partner. Remaining premium partners form the carousel.
//!
//! Inactive partners (`active: false`) never appear.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::models::{Partner, RecommendationSection, StaticItem, Zone};

// =============================================================================
// Category filter
// =============================================================================

/// Active filter chip on the recommendations page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == Self::ALL_KEY {
            Self::All
        } else {
            Self::Category(raw.to_string())
        }
    }

    pub fn matches(&self, category_key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(key) => key == category_key,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Category(key) => key,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================================
// Partner tiers
// =============================================================================

/// Partners eligible for display, in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerTiers<'a> {
    /// Premium tier (global partners)
    pub featured: Vec<&'a Partner>,
    /// Zone-scoped tier
    pub basic: Vec<&'a Partner>,
}

impl PartnerTiers<'_> {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.basic.is_empty()
    }
}

/// Split partners into premium and zone-scoped tiers for the active filter.
pub fn compose_recommendations<'a>(
    partners: &'a [Partner],
    zone: Option<&Zone>,
    filter: &CategoryFilter,
) -> PartnerTiers<'a> {
    let eligible = move || {
        partners
            .iter()
            .filter(move |p| p.active && filter.matches(&p.category_key))
    };

    let featured = eligible().filter(|p| p.global).collect();
    let basic = match zone {
        Some(zone) => eligible()
            .filter(|p| !p.global && p.serves_zone(&zone.id))
            .collect(),
        None => Vec::new(),
    };

    PartnerTiers { featured, basic }
}

/// Static sections restricted to items matching the filter; empty sections are dropped.
pub fn filter_sections(
    sections: &[RecommendationSection],
    filter: &CategoryFilter,
) -> Vec<RecommendationSection> {
    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<StaticItem> = section
                .items
                .iter()
                .filter(|item| filter.matches(&item.type_key))
                .cloned()
                .collect();
            (!items.is_empty()).then(|| RecommendationSection {
                title_key: section.title_key.clone(),
                items,
            })
        })
        .collect()
}

// =============================================================================
// Layout
// =============================================================================

/// Occupant of the primary spotlight slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spotlight<'a> {
    /// Host-curated featured item
    Host(&'a StaticItem),
    /// First premium partner
    Partner(&'a Partner),
}

/// Partner tiers arranged into page slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationLayout<'a> {
    pub spotlight: Option<Spotlight<'a>>,
    /// Secondary premium carousel
    pub carousel: Vec<&'a Partner>,
    pub basic: Vec<&'a Partner>,
}

impl RecommendationLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.spotlight.is_none() && self.carousel.is_empty() && self.basic.is_empty()
    }
}

/// Place the host's featured item and the premium tier into spotlight and carousel.
pub fn arrange<'a>(
    host_featured: Option<&'a StaticItem>,
    tiers: PartnerTiers<'a>,
) -> RecommendationLayout<'a> {
    let PartnerTiers { featured, basic } = tiers;

    let (spotlight, carousel) = match host_featured {
        Some(item) => (Some(Spotlight::Host(item)), featured),
        None => {
            let mut premium = featured.into_iter();
            let spotlight = premium.next().map(Spotlight::Partner);
            (spotlight, premium.collect())
        }
    };

    RecommendationLayout {
        spotlight,
        carousel,
        basic,
    }
}
