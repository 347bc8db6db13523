//! Apartment Model

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers::{self, lenient_f64};
use super::zone::GeoPoint;
use crate::error::{GuideError, GuideResult};

/// Apartment record from `apartments.json`
///
/// Every section is optional; pages hide what the host did not fill in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    /// Catalog key, filled in by [`ApartmentCatalog`]
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub images: Option<ApartmentImages>,
    #[serde(default)]
    pub host: Option<HostInfo>,
    #[serde(default)]
    pub wifi: Option<WifiInfo>,
    #[serde(default)]
    pub access: Option<AccessInfo>,
    /// Rules that cannot be read are dropped
    #[serde(default, deserialize_with = "house_rules")]
    pub house_rules: Option<Vec<HouseRule>>,
    #[serde(default)]
    pub rules: HouseTimes,
    /// Device key -> details, in document order
    #[serde(default, deserialize_with = "serde_helpers::ordered_entries")]
    pub devices: Vec<(String, Device)>,
    #[serde(default)]
    pub raixer_devices: Option<DoorLockBinding>,
    #[serde(default)]
    pub recommendations: Recommendations,
}

impl Apartment {
    /// Position of the apartment, from top-level `lat`/`lng` or the nested
    /// `coordinates` object. `None` if missing or not numeric.
    pub fn location(&self) -> Option<GeoPoint> {
        let (lat, lng) = match (&self.lat, &self.lng) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => {
                let nested = self.coordinates.as_ref()?;
                (nested.lat.as_ref()?, nested.lng.as_ref()?)
            }
        };
        GeoPoint::new(lenient_f64(lat)?, lenient_f64(lng)?)
    }

    /// Door-lock device id, if door control is configured
    pub fn door_device_id(&self) -> Option<&str> {
        self.raixer_devices
            .as_ref()
            .and_then(|d| d.device_id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    /// Cover photo (`images.portada`)
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|i| i.portada.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn host_name(&self) -> Option<&str> {
        self.host.as_ref().and_then(|h| non_empty(&h.name))
    }

    pub fn device(&self, key: &str) -> Option<&Device> {
        self.devices.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApartmentImages {
    #[serde(default)]
    pub portada: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// WiFi credentials; older records use `type`/`code` instead of `network`/`password`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WifiInfo {
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl WifiInfo {
    pub fn network_name(&self) -> Option<&str> {
        non_empty(&self.network).or_else(|| non_empty(&self.kind))
    }

    pub fn secret(&self) -> Option<&str> {
        non_empty(&self.password).or_else(|| non_empty(&self.code))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessInfo {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
}

impl AccessInfo {
    pub fn access_kind(&self) -> AccessKind {
        self.kind.as_deref().map(AccessKind::parse).unwrap_or_default()
    }

    pub fn code(&self) -> Option<&str> {
        non_empty(&self.code)
    }
}

/// How the guest gets in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    Keybox,
    Keypad,
    Smart,
    #[default]
    Default,
}

impl AccessKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "keybox" => Self::Keybox,
            "keypad" => Self::Keypad,
            "smart" | "inteligente" => Self::Smart,
            _ => Self::Default,
        }
    }

    /// Material icon name
    pub fn icon(self) -> &'static str {
        match self {
            Self::Keybox => "key",
            Self::Keypad => "dialpad",
            Self::Smart => "lock",
            Self::Default => "vpn_key",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRule {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub title_key: String,
    #[serde(default)]
    pub subtitle_key: Option<String>,
}

/// Quiet hours and checkout time; missing fields take the house defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseTimes {
    pub quiet_hours_start: String,
    pub quiet_hours_end: String,
    pub checkout_time: String,
}

impl Default for HouseTimes {
    fn default() -> Self {
        Self {
            quiet_hours_start: "22:00".into(),
            quiet_hours_end: "08:00".into(),
            checkout_time: "11:00".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub details_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorLockBinding {
    #[serde(default)]
    pub device_id: Option<String>,
}

/// Host-curated recommendations stored on the apartment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recommendations {
    /// Explicit spotlight item; outranks premium partners
    #[serde(default)]
    pub featured: Option<StaticItem>,
    #[serde(default)]
    pub sections: Vec<RecommendationSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSection {
    pub title_key: String,
    #[serde(default)]
    pub items: Vec<StaticItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn house_rules<'de, D>(deserializer: D) -> Result<Option<Vec<HouseRule>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_helpers::lenient_list(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// =============================================================================
// Catalog
// =============================================================================

/// All apartments, keyed by id
#[derive(Debug, Clone, Default)]
pub struct ApartmentCatalog {
    apartments: HashMap<String, Apartment>,
}

impl From<HashMap<String, Apartment>> for ApartmentCatalog {
    fn from(mut apartments: HashMap<String, Apartment>) -> Self {
        for (id, apartment) in apartments.iter_mut() {
            apartment.id.clone_from(id);
        }
        Self { apartments }
    }
}

impl ApartmentCatalog {
    /// Decode `apartments.json`
    ///
    /// Only a document that is not a JSON object fails. An apartment record
    /// that cannot be read is logged and left out, so one bad host entry does
    /// not take down every other guide.
    pub fn from_json(raw: &str) -> GuideResult<Self> {
        let records: Map<String, Value> =
            serde_json::from_str(raw).map_err(|e| GuideError::invalid_catalog("apartment", e))?;
        let apartments = records
            .into_iter()
            .filter_map(|(id, record)| match serde_json::from_value::<Apartment>(record) {
                Ok(apartment) => Some((id, apartment)),
                Err(e) => {
                    tracing::warn!(apartment = %id, error = %e, "Skipping malformed apartment");
                    None
                }
            })
            .collect::<HashMap<_, _>>();
        Ok(apartments.into())
    }

    pub fn get(&self, id: &str) -> Option<&Apartment> {
        self.apartments.get(id)
    }

    pub fn len(&self) -> usize {
        self.apartments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apartments.is_empty()
    }

    /// Look up `requested`, falling back to `default_id` when unknown.
    pub fn resolve(&self, requested: &str, default_id: &str) -> GuideResult<&Apartment> {
        if let Some(apartment) = self.get(requested) {
            return Ok(apartment);
        }
        tracing::warn!(
            requested = %requested,
            fallback = %default_id,
            "Apartment not found, using default"
        );
        self.get(default_id)
            .ok_or_else(|| GuideError::ApartmentNotFound(default_id.to_string()))
    }
}
