//! Recommendations page
//!
//! Slot order on the page: static sections, spotlight, premium carousel,
//! local (zone) offers, then the notices.

use serde::Serialize;

use crate::i18n::{TextKey, Translator};
use crate::models::{Apartment, Partner, StaticItem, Zone};
use crate::recommend::{
    CategoryFilter, Spotlight, arrange, compose_recommendations, filter_sections,
};

/// Section shown as a horizontal carousel instead of a list
const CAROUSEL_SECTION: &str = "essentials_title";

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsPage {
    pub title: String,
    pub filter: CategoryFilter,
    pub zone: Option<ZoneSummary>,
    pub sections: Vec<SectionView>,
    pub spotlight: Option<SpotlightView>,
    /// Premium partners not in the spotlight
    pub premium: Option<PartnerBlock>,
    /// Basic partners of the resolved zone
    pub local: Option<PartnerBlock>,
    /// Set when the apartment could not be placed in a zone
    pub no_zone: Option<Notice>,
    /// Set when nothing at all matched
    pub empty: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    Carousel,
    List,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub title: String,
    pub layout: SectionLayout,
    pub items: Vec<StaticItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SpotlightView {
    Host { item: StaticItem },
    Partner { partner: PartnerCard },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerCard {
    pub name: String,
    pub category_key: String,
    pub premium: bool,
    pub image: Option<String>,
    pub description: String,
    pub offer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartnerBlock {
    pub title: String,
    pub partners: Vec<PartnerCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl RecommendationsPage {
    pub fn build(
        apartment: &Apartment,
        partners: &[Partner],
        zone: Option<&Zone>,
        filter: &CategoryFilter,
        translator: &Translator,
    ) -> Self {
        let recs = &apartment.recommendations;

        let sections = filter_sections(&recs.sections, filter)
            .into_iter()
            .map(|section| SectionView {
                title: translator.resolve(&format!("recommendations.{}", section.title_key)),
                layout: if section.title_key == CAROUSEL_SECTION {
                    SectionLayout::Carousel
                } else {
                    SectionLayout::List
                },
                items: section.items,
            })
            .collect();

        let host_featured = recs
            .featured
            .as_ref()
            .filter(|item| filter.matches(&item.type_key));
        let tiers = compose_recommendations(partners, zone, filter);
        let layout = arrange(host_featured, tiers);

        let card = |p: &Partner| PartnerCard {
            name: p.name.clone(),
            category_key: p.category_key.clone(),
            premium: p.global,
            image: p.image.clone(),
            description: p.description.clone().unwrap_or_default(),
            offer: p
                .offer
                .clone()
                .unwrap_or_else(|| translator.text(TextKey::OfferAvailable)),
        };

        let spotlight = layout.spotlight.map(|s| match s {
            Spotlight::Host(item) => SpotlightView::Host { item: item.clone() },
            Spotlight::Partner(p) => SpotlightView::Partner { partner: card(p) },
        });

        let premium = (!layout.carousel.is_empty()).then(|| PartnerBlock {
            title: translator.text(TextKey::PremiumTitle),
            partners: layout.carousel.iter().map(|p| card(*p)).collect(),
        });

        let local = match zone {
            Some(zone) if !layout.basic.is_empty() => Some(PartnerBlock {
                title: translator.text_with(TextKey::LocalOffersIn, &[("zone", &zone.name)]),
                partners: layout.basic.iter().map(|p| card(*p)).collect(),
            }),
            _ => None,
        };

        let no_zone = zone.is_none().then(|| Notice {
            title: translator.text(TextKey::NoZoneTitle),
            description: translator.text(TextKey::NoZoneDesc),
        });

        let mut page = Self {
            title: translator.text(TextKey::RecommendationsTitle),
            filter: filter.clone(),
            zone: zone.map(|z| ZoneSummary {
                id: z.id.clone(),
                name: z.name.clone(),
            }),
            sections,
            spotlight,
            premium,
            local,
            no_zone,
            empty: None,
        };
        if page.has_no_content() {
            page.empty = Some(Notice {
                title: translator.text(TextKey::NoContentTitle),
                description: translator.text(TextKey::NoContentDesc),
            });
        }
        page
    }

    fn has_no_content(&self) -> bool {
        self.sections.is_empty()
            && self.spotlight.is_none()
            && self.premium.is_none()
            && self.local.is_none()
    }

    /// Nothing to show; the page renders its "nothing available" placeholder
    pub fn is_empty(&self) -> bool {
        self.empty.is_some()
    }
}
