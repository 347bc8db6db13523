//! Zone Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;
use crate::error::GuideResult;

/// Named neighbourhood polygon from `zones.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// Ring vertices as `[lng, lat]`; may or may not repeat the first vertex at the end
    #[serde(default, deserialize_with = "serde_helpers::vertices")]
    pub polygon: Vec<[f64; 2]>,
}

impl Zone {
    /// Decode `zones.json`, skipping zones that cannot be read
    pub fn catalog_from_json(raw: &str) -> GuideResult<Vec<Self>> {
        serde_helpers::decode_records(raw, "zone")
    }

    pub fn new(id: impl Into<String>, name: impl Into<String>, polygon: Vec<[f64; 2]>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            polygon,
        }
    }
}

/// WGS84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// `None` unless both coordinates are finite
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let point = Self { lat, lng };
        point.is_valid().then_some(point)
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}
