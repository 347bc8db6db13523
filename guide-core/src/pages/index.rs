//! Home page: hero, property card, language grid and section tiles

use serde::Serialize;

use super::essentials::{NO_ADDRESS, NO_NAME};
use super::navigation::{self, LanguageOption, NavTarget};
use crate::i18n::{TextKey, Translator};
use crate::models::Apartment;

const NO_HOST: &str = "Anfitrión";

/// Sections offered as tiles once the guest starts the guide
const TILES: [NavTarget; 5] = [
    NavTarget::Essentials,
    NavTarget::Devices,
    NavTarget::Recommendations,
    NavTarget::Tourism,
    NavTarget::Contact,
];

#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    /// Cover photo behind the hero; `None` keeps the default background
    pub hero_image: Option<String>,
    pub hero_subtitle: String,
    pub welcome_title: String,
    pub welcome_bold: String,
    pub property: PropertyCard,
    pub select_language_title: String,
    pub select_language_desc: String,
    pub start_guide: String,
    pub languages: Vec<LanguageOption>,
    pub tiles: Vec<NavTile>,
    /// `"<hosted by> <host name>"`
    pub hosted_by: String,
    pub app_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCard {
    pub name: String,
    pub address: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavTile {
    pub target: NavTarget,
    pub id: &'static str,
    pub href: String,
    pub title: String,
    pub description: String,
}

impl IndexPage {
    pub fn build(apartment: &Apartment, root: &str, translator: &Translator) -> Self {
        let cover = apartment.cover_image().map(str::to_string);
        let language = translator.language();

        let tiles = TILES
            .iter()
            .map(|&target| NavTile {
                target,
                id: target.element_id(),
                href: navigation::href(root, target, &apartment.id, language),
                title: translator.text(target.label_key()),
                description: target
                    .description_key()
                    .map(|key| translator.text(key))
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            hero_image: cover.clone(),
            hero_subtitle: translator.text(TextKey::HeroSubtitle),
            welcome_title: translator.text(TextKey::WelcomeTitle),
            welcome_bold: translator.text(TextKey::WelcomeBold),
            property: PropertyCard {
                name: apartment.name.clone().unwrap_or_else(|| NO_NAME.into()),
                address: apartment.address.clone().unwrap_or_else(|| NO_ADDRESS.into()),
                thumbnail: cover,
            },
            select_language_title: translator.text(TextKey::SelectLanguageTitle),
            select_language_desc: translator.text(TextKey::SelectLanguageDesc),
            start_guide: translator.text(TextKey::StartGuide),
            languages: navigation::language_options(root, &apartment.id, translator),
            tiles,
            hosted_by: format!(
                "{} {}",
                translator.text(TextKey::HostedBy),
                apartment.host_name().unwrap_or(NO_HOST)
            ),
            app_version: translator.text(TextKey::AppVersion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::ApartmentCatalog;
    use serde_json::json;

    fn apartment(record: serde_json::Value) -> Apartment {
        ApartmentCatalog::from_json(&json!({ "sol-101": record }).to_string())
            .unwrap()
            .get("sol-101")
            .unwrap()
            .clone()
    }

    fn english() -> Translator {
        Translator::new(
            Language::En,
            json!({
                "index": {
                    "hero_subtitle": "Your stay, sorted",
                    "welcome_title": "Welcome to",
                    "welcome_bold": "your home",
                    "hosted_by": "Hosted by",
                    "start_guide": "Start"
                },
                "navigation": {
                    "essentials_title": "Essentials",
                    "essentials_desc": "Access, WiFi and rules"
                }
            }),
        )
    }

    #[test]
    fn test_home_page() {
        let apartment = apartment(json!({
            "name": "Sol 101",
            "address": "Calle del Sol 1",
            "images": { "portada": "img/sol.jpg" },
            "host": { "name": "Marta" }
        }));
        let page = IndexPage::build(&apartment, "", &english());

        assert_eq!(page.hero_image.as_deref(), Some("img/sol.jpg"));
        assert_eq!(page.property.thumbnail.as_deref(), Some("img/sol.jpg"));
        assert_eq!(page.property.name, "Sol 101");
        assert_eq!(page.welcome_bold, "your home");
        assert_eq!(page.hosted_by, "Hosted by Marta");
        assert_eq!(page.start_guide, "Start");
        assert_eq!(page.languages.len(), 4);

        assert_eq!(page.tiles.len(), 5);
        let essentials = &page.tiles[0];
        assert_eq!(essentials.target, NavTarget::Essentials);
        assert_eq!(essentials.title, "Essentials");
        assert_eq!(essentials.description, "Access, WiFi and rules");
        assert_eq!(essentials.href, "./pages/essentials.html?apartment=sol-101&lang=en");
        assert_eq!(page.tiles[1].description, "[navigation.devices_desc]");
    }

    #[test]
    fn test_home_page_fallbacks() {
        let apartment = apartment(json!({ "images": { "portada": "" }, "host": {} }));
        let page = IndexPage::build(&apartment, "/guide", &english());

        assert!(page.hero_image.is_none());
        assert_eq!(page.property.name, NO_NAME);
        assert_eq!(page.property.address, NO_ADDRESS);
        assert_eq!(page.hosted_by, "Hosted by Anfitrión");
        assert!(page.languages[0].href.starts_with("/guide/index.html"));
    }
}
