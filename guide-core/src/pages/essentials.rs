//! Essentials page: access, WiFi and house rules

use serde::Serialize;

use crate::i18n::{TextKey, Translator};
use crate::models::{AccessKind, Apartment, HouseTimes};

pub(crate) const NO_NAME: &str = "Apartamento sin nombre";
pub(crate) const NO_ADDRESS: &str = "Dirección no disponible";

#[derive(Debug, Clone, Serialize)]
pub struct EssentialsPage {
    pub title: String,
    pub apartment_name: String,
    pub address: String,
    /// Hidden when the apartment has no access data
    pub access: Option<AccessView>,
    /// Hidden when the apartment has no WiFi data
    pub wifi: Option<WifiView>,
    /// Hidden when the apartment has no house rules
    pub house_rules: Option<HouseRulesView>,
    pub house_times: HouseTimes,
    /// Door control is available for this apartment
    pub door_control: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessView {
    pub title: String,
    pub kind: AccessKind,
    pub kind_label: String,
    pub icon: &'static str,
    /// `---` when no code is set
    pub code: String,
    pub copyable: bool,
    pub instructions_title: String,
    /// Steps with glossary terms translated; empty means "no instructions"
    pub steps: Vec<String>,
    pub no_instructions: Option<String>,
    /// Shown when steps were machine-translated
    pub translation_note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WifiView {
    pub title: String,
    pub network_label: String,
    pub network: Option<String>,
    pub password_label: String,
    pub password: Option<String>,
}

impl WifiView {
    pub fn copyable(&self) -> bool {
        self.password.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseRulesView {
    pub title: String,
    pub rules: Vec<HouseRuleView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRuleView {
    pub icon: String,
    pub color: String,
    pub title: String,
    pub subtitle: Option<String>,
}

impl EssentialsPage {
    pub fn build(apartment: &Apartment, translator: &Translator) -> Self {
        Self {
            title: translator.text(TextKey::EssentialsTitle),
            apartment_name: apartment.name.clone().unwrap_or_else(|| NO_NAME.into()),
            address: apartment.address.clone().unwrap_or_else(|| NO_ADDRESS.into()),
            access: access_view(apartment, translator),
            wifi: wifi_view(apartment, translator),
            house_rules: house_rules_view(apartment, translator),
            house_times: apartment.rules.clone(),
            door_control: apartment.door_device_id().is_some(),
        }
    }
}

fn access_view(apartment: &Apartment, translator: &Translator) -> Option<AccessView> {
    let access = apartment.access.as_ref()?;
    let kind = access.access_kind();
    let kind_label = match kind {
        AccessKind::Keybox => translator.text(TextKey::AccessKeybox),
        AccessKind::Keypad => translator.text(TextKey::AccessKeypad),
        AccessKind::Smart => translator.text(TextKey::AccessSmart),
        AccessKind::Default => translator.text(TextKey::AccessDefault),
    };

    let (steps, no_instructions, translation_note) = match &access.instructions {
        Some(steps) => {
            let steps = steps.iter().map(|s| translator.translate_text(s)).collect();
            let note = (!translator.language().is_base())
                .then(|| translator.text(TextKey::InstructionsNote));
            (steps, None, note)
        }
        None => (Vec::new(), Some(translator.text(TextKey::NoInstructions)), None),
    };

    Some(AccessView {
        title: translator.text(TextKey::AccessTitle),
        kind,
        kind_label,
        icon: kind.icon(),
        code: access.code().unwrap_or("---").to_string(),
        copyable: access.code().is_some(),
        instructions_title: translator.text(TextKey::AccessInstructions),
        steps,
        no_instructions,
        translation_note,
    })
}

fn wifi_view(apartment: &Apartment, translator: &Translator) -> Option<WifiView> {
    let wifi = apartment.wifi.as_ref()?;
    Some(WifiView {
        title: translator.text(TextKey::WifiTitle),
        network_label: translator.text(TextKey::WifiNetwork),
        network: wifi.network_name().map(str::to_string),
        password_label: translator.text(TextKey::WifiPassword),
        password: wifi.secret().map(str::to_string),
    })
}

fn house_rules_view(apartment: &Apartment, translator: &Translator) -> Option<HouseRulesView> {
    let rules = apartment.house_rules.as_ref()?;
    let rules = rules
        .iter()
        .filter(|rule| !rule.title_key.is_empty())
        .map(|rule| HouseRuleView {
            icon: rule.icon.clone(),
            color: rule.color.clone().unwrap_or_else(|| "primary".into()),
            title: translator.resolve_lenient(&rule.title_key, &[], Default::default()),
            subtitle: rule
                .subtitle_key
                .as_deref()
                .map(|key| translator.resolve_lenient(key, &[], Default::default())),
        })
        .collect();
    Some(HouseRulesView {
        title: translator.text(TextKey::HouseRules),
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::ApartmentCatalog;
    use serde_json::json;

    fn apartment() -> Apartment {
        let catalog = ApartmentCatalog::from_json(
            &json!({
                "sol-101": {
                    "name": "Sol 101",
                    "access": {
                        "type": "keybox",
                        "code": "4821",
                        "instructions": ["Abre la caja junto a la puerta"]
                    },
                    "wifi": { "network": "SolNet", "password": "secret" },
                    "houseRules": [
                        { "icon": "smoke_free", "titleKey": "rules_no_smoking" },
                        { "icon": "help" },
                        { "icon": "pets", "color": "red", "titleKey": "rules.pets", "subtitleKey": "rules.pets_desc" }
                    ],
                    "raixerDevices": { "deviceId": "dev-1" }
                },
                "bare": {}
            })
            .to_string(),
        )
        .unwrap();
        catalog.get("sol-101").unwrap().clone()
    }

    fn english() -> Translator {
        Translator::new(
            Language::En,
            json!({
                "essentials": {
                    "title": "Essentials",
                    "access_keybox": "Key box",
                    "instructions_note": "Partially auto-translated"
                },
                "rules": { "no_smoking": "No smoking", "pets": "No pets" },
                "glossary": { "caja": "box", "puerta": "door" }
            }),
        )
    }

    #[test]
    fn test_access_section() {
        let page = EssentialsPage::build(&apartment(), &english());
        let access = page.access.unwrap();
        assert_eq!(access.kind, AccessKind::Keybox);
        assert_eq!(access.kind_label, "Key box");
        assert_eq!(access.icon, "key");
        assert_eq!(access.code, "4821");
        assert!(access.copyable);
        assert_eq!(access.steps, ["Abre la box junto a la door"]);
        assert_eq!(access.translation_note.as_deref(), Some("Partially auto-translated"));
    }

    #[test]
    fn test_no_note_in_base_language() {
        let t = Translator::new(Language::Es, json!({}));
        let access = EssentialsPage::build(&apartment(), &t).access.unwrap();
        assert_eq!(access.steps, ["Abre la caja junto a la puerta"]);
        assert!(access.translation_note.is_none());
    }

    #[test]
    fn test_house_rules_and_wifi() {
        let page = EssentialsPage::build(&apartment(), &english());
        let rules = page.house_rules.unwrap().rules;
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].title, "No smoking");
        assert_eq!(rules[0].color, "primary");
        assert_eq!(rules[1].color, "red");
        assert_eq!(rules[1].subtitle.as_deref(), Some("[rules.pets_desc]"));

        let wifi = page.wifi.unwrap();
        assert_eq!(wifi.network.as_deref(), Some("SolNet"));
        assert!(wifi.copyable());
        assert!(page.door_control);
    }

    #[test]
    fn test_bare_apartment_hides_sections() {
        let page = EssentialsPage::build(&Apartment::default(), &english());
        assert_eq!(page.title, "Essentials");
        assert_eq!(page.apartment_name, NO_NAME);
        assert!(page.access.is_none());
        assert!(page.wifi.is_none());
        assert!(page.house_rules.is_none());
        assert!(!page.door_control);
        assert_eq!(page.house_times, HouseTimes::default());
    }
}
