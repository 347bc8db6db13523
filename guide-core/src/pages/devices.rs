//! Devices page: appliance list and per-device details

use serde::Serialize;

use crate::i18n::{TextKey, Translator};
use crate::models::{AccessKind, Apartment};

#[derive(Debug, Clone, Serialize)]
pub struct DevicesPage {
    pub title: String,
    pub headline: String,
    pub subtitle: String,
    pub appliances_title: String,
    pub contact_host: String,
    pub unlock_door: String,
    pub unlock_door_desc: String,
    pub wifi_code: String,
    pub wifi_code_desc: String,
    /// In the order the host listed them
    pub items: Vec<DeviceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceItem {
    pub key: String,
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

/// Content of the details dialog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceDetail {
    Access {
        title: String,
        code_label: String,
        code: String,
        instructions_label: String,
        instructions: String,
    },
    Wifi {
        title: String,
        network_label: String,
        network: String,
        password_label: String,
        password: String,
    },
    Appliance {
        title: String,
        instructions: String,
    },
}

/// Material icon for a device key
pub fn device_icon(key: &str) -> &'static str {
    match key {
        "heating" => "thermostat",
        "hob" => "countertops",
        "ac" => "ac_unit",
        "washing_machine" => "local_laundry_service",
        "tv" => "tv",
        "coffee_maker" => "coffee_maker",
        _ => "help",
    }
}

impl DevicesPage {
    pub fn build(apartment: &Apartment, translator: &Translator) -> Self {
        let items = apartment
            .devices
            .iter()
            .map(|(key, _)| DeviceItem {
                key: key.clone(),
                icon: device_icon(key),
                title: translator.resolve(&format!("devices.{key}_title")),
                description: translator.resolve(&format!("devices.{key}_desc")),
            })
            .collect();

        Self {
            title: translator.text(TextKey::NavDevices),
            headline: translator.text(TextKey::DevicesTitle),
            subtitle: translator.text(TextKey::DevicesSubtitle),
            appliances_title: translator.text(TextKey::AppliancesTitle),
            contact_host: translator.text(TextKey::ContactHost),
            unlock_door: translator.text(TextKey::UnlockDoor),
            unlock_door_desc: translator.text(TextKey::UnlockDoorDesc),
            wifi_code: translator.text(TextKey::WifiCode),
            wifi_code_desc: translator.text(TextKey::WifiCodeDesc),
            items,
        }
    }
}

/// Details for `key`: `access` and `wifi` are built-in, anything else must be a listed device.
pub fn device_detail(apartment: &Apartment, key: &str, translator: &Translator) -> Option<DeviceDetail> {
    match key {
        "access" => {
            let access = apartment.access.as_ref()?;
            let hint = match access.access_kind() {
                AccessKind::Keybox => TextKey::KeyboxHint,
                _ => TextKey::CardHint,
            };
            Some(DeviceDetail::Access {
                title: translator.text(TextKey::AccessTitle),
                code_label: translator.text(TextKey::AccessCode),
                code: access.code().unwrap_or("---").to_string(),
                instructions_label: translator.text(TextKey::AccessInstructions),
                instructions: translator.text(hint),
            })
        }
        "wifi" => {
            let wifi = apartment.wifi.as_ref()?;
            Some(DeviceDetail::Wifi {
                title: translator.text(TextKey::WifiTitle),
                network_label: translator.text(TextKey::WifiNetwork),
                network: wifi.network_name().unwrap_or_default().to_string(),
                password_label: translator.text(TextKey::WifiPassword),
                password: wifi.secret().unwrap_or_default().to_string(),
            })
        }
        _ => {
            let device = apartment.device(key)?;
            let details_key = device
                .details_key
                .clone()
                .unwrap_or_else(|| format!("{key}_details"));
            Some(DeviceDetail::Appliance {
                title: translator.resolve(&format!("devices.{key}_title")),
                instructions: translator.resolve(&format!("devices.{details_key}")),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::ApartmentCatalog;
    use serde_json::json;

    fn apartment() -> Apartment {
        ApartmentCatalog::from_json(
            &json!({
                "sol-101": {
                    "access": { "type": "card", "code": "77" },
                    "devices": {
                        "washing_machine": { "detailsKey": "washing_machine_details" },
                        "sauna": {}
                    }
                }
            })
            .to_string(),
        )
        .unwrap()
        .get("sol-101")
        .unwrap()
        .clone()
    }

    fn translator() -> Translator {
        Translator::new(
            Language::Es,
            json!({
                "devices": {
                    "washing_machine_title": "Lavadora",
                    "washing_machine_desc": "Programa eco",
                    "washing_machine_details": "Usa 30 grados",
                    "access_card_hint": "Pasa la tarjeta por el lector"
                }
            }),
        )
    }

    #[test]
    fn test_items_in_order_with_icons() {
        let page = DevicesPage::build(&apartment(), &translator());
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].icon, "local_laundry_service");
        assert_eq!(page.items[0].title, "Lavadora");
        assert_eq!(page.items[1].icon, "help");
        assert_eq!(page.items[1].title, "[devices.sauna_title]");
    }

    #[test]
    fn test_details() {
        let apartment = apartment();
        let t = translator();

        match device_detail(&apartment, "washing_machine", &t).unwrap() {
            DeviceDetail::Appliance { instructions, .. } => assert_eq!(instructions, "Usa 30 grados"),
            other => panic!("unexpected detail: {other:?}"),
        }
        match device_detail(&apartment, "access", &t).unwrap() {
            DeviceDetail::Access { code, instructions, .. } => {
                assert_eq!(code, "77");
                assert_eq!(instructions, "Pasa la tarjeta por el lector");
            }
            other => panic!("unexpected detail: {other:?}"),
        }
        assert!(device_detail(&apartment, "wifi", &t).is_none());
        assert!(device_detail(&apartment, "jacuzzi", &t).is_none());
    }
}
