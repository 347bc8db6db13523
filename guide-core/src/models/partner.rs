//! Partner Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::{default_true, null_as_default, null_as_true};
use crate::error::GuideResult;

/// Business listed on the recommendations page (`partners.json`)
///
/// Global partners are the premium tier and appear everywhere; the rest are
/// basic listings scoped to the zones they paid for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub global: bool,
    /// Only an explicit `false` hides the partner
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
    /// Zone ids; ignored for global partners
    #[serde(default, deserialize_with = "null_as_default")]
    pub zones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<String>,
}

impl Partner {
    /// Decode `partners.json`, skipping listings that cannot be read
    pub fn catalog_from_json(raw: &str) -> GuideResult<Vec<Self>> {
        super::serde_helpers::decode_records(raw, "partner")
    }

    pub fn new(name: impl Into<String>, category_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category_key: category_key.into(),
            global: false,
            active: true,
            zones: Vec::new(),
            image: None,
            description: None,
            offer: None,
        }
    }

    /// Premium partner shown in every zone
    pub fn premium(mut self) -> Self {
        self.global = true;
        self
    }

    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = zones.into_iter().map(Into::into).collect();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn serves_zone(&self, zone_id: &str) -> bool {
        self.zones.iter().any(|z| z == zone_id)
    }
}
