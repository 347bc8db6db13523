//! Links between guide pages
//!
//! Every link carries `?apartment=<id>&lang=<code>` so the guest never loses
//! their apartment or language while moving around.

use serde::Serialize;

use crate::i18n::{Language, TextKey, Translator};

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    Home,
    Devices,
    Recommendations,
    Tourism,
    Contact,
    Essentials,
}

impl NavTarget {
    pub const ALL: [NavTarget; 6] = [
        NavTarget::Home,
        NavTarget::Devices,
        NavTarget::Recommendations,
        NavTarget::Tourism,
        NavTarget::Contact,
        NavTarget::Essentials,
    ];

    /// Element id of the tab
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Home => "nav-home",
            Self::Devices => "nav-devices",
            Self::Recommendations => "nav-recommendations",
            Self::Tourism => "nav-tourism",
            Self::Contact => "nav-contact",
            Self::Essentials => "nav-essentials",
        }
    }

    /// Page path relative to the site root
    pub fn page(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Devices => "pages/devices.html",
            Self::Recommendations => "pages/recommendations.html",
            Self::Tourism => "pages/tourism.html",
            Self::Contact => "pages/contact.html",
            Self::Essentials => "pages/essentials.html",
        }
    }

    pub fn label_key(self) -> TextKey {
        match self {
            Self::Home => TextKey::NavHome,
            Self::Devices => TextKey::NavDevices,
            Self::Recommendations => TextKey::NavRecommendations,
            Self::Tourism => TextKey::NavTourism,
            Self::Contact => TextKey::NavContact,
            Self::Essentials => TextKey::NavEssentials,
        }
    }

    /// One-line tile description on the home page; the home tab has none
    pub fn description_key(self) -> Option<TextKey> {
        match self {
            Self::Home => None,
            Self::Devices => Some(TextKey::NavDevicesDesc),
            Self::Recommendations => Some(TextKey::NavRecommendationsDesc),
            Self::Tourism => Some(TextKey::NavTourismDesc),
            Self::Contact => Some(TextKey::NavContactDesc),
            Self::Essentials => Some(TextKey::NavEssentialsDesc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub target: NavTarget,
    pub id: &'static str,
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageOption {
    pub language: Language,
    pub flag: &'static str,
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// `?apartment=<id>&lang=<code>` with both values percent-encoded
pub fn guide_query(apartment_id: &str, language: Language) -> String {
    format!(
        "?apartment={}&lang={}",
        urlencoding::encode(apartment_id),
        urlencoding::encode(language.code())
    )
}

pub fn href(root: &str, target: NavTarget, apartment_id: &str, language: Language) -> String {
    format!("{}{}{}", root_prefix(root), target.page(), guide_query(apartment_id, language))
}

/// All bottom navigation tabs, labels resolved
pub fn bottom_navigation(
    root: &str,
    apartment_id: &str,
    translator: &Translator,
) -> Vec<NavLink> {
    let language = translator.language();
    NavTarget::ALL
        .iter()
        .map(|&target| NavLink {
            target,
            id: target.element_id(),
            href: href(root, target, apartment_id, language),
            label: translator.text(target.label_key()),
        })
        .collect()
}

/// Language picker: one entry per supported language, pointing at the home page
pub fn language_options(
    root: &str,
    apartment_id: &str,
    translator: &Translator,
) -> Vec<LanguageOption> {
    Language::ALL
        .iter()
        .map(|&language| LanguageOption {
            language,
            flag: language.flag(),
            label: translator.resolve(language.name_key()),
            href: href(root, NavTarget::Home, apartment_id, language),
            selected: language == translator.language(),
        })
        .collect()
}

fn root_prefix(root: &str) -> String {
    if root.is_empty() {
        "./".to_string()
    } else if root.ends_with('/') {
        root.to_string()
    } else {
        format!("{root}/")
    }
}
