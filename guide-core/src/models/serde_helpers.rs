//! Lenient decoding helpers
//!
//! Catalogs are hand-edited JSON, so numbers sometimes arrive as strings.
//! These helpers accept both and drop what cannot be read instead of failing
//! the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{GuideError, GuideResult};

pub fn default_true() -> bool {
    true
}

/// `null` or missing reads as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` or missing reads as `true`; only an explicit `false` is false.
pub fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Decode a JSON array one record at a time.
///
/// Records that do not fit `T` are logged and skipped. Only a document that is
/// not an array at all is an error.
pub fn decode_records<T>(raw: &str, catalog: &'static str) -> GuideResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let records: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| GuideError::invalid_catalog(catalog, e))?;
    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(catalog, index, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect())
}

/// Array field whose unreadable entries are dropped; `null` reads as empty.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// Read a finite number from a JSON number or numeric string.
pub fn lenient_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Polygon vertices as `[lng, lat]`; vertices that are not two finite numbers are dropped.
pub fn vertices<'de, D>(deserializer: D) -> Result<Vec<[f64; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .iter()
        .filter_map(|vertex| {
            let pair = vertex.as_array()?;
            match pair.as_slice() {
                [lng, lat, ..] => Some([lenient_f64(lng)?, lenient_f64(lat)?]),
                _ => None,
            }
        })
        .collect())
}

/// A JSON object decoded into `(key, value)` pairs, keeping document order.
pub fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let map = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    map.into_iter()
        .map(|(key, value)| {
            serde_json::from_value(value)
                .map(|v| (key, v))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_f64() {
        assert_eq!(lenient_f64(&json!(40.41)), Some(40.41));
        assert_eq!(lenient_f64(&json!(" -3.70 ")), Some(-3.70));
        assert_eq!(lenient_f64(&json!("north")), None);
        assert_eq!(lenient_f64(&json!(null)), None);
        assert_eq!(lenient_f64(&json!("NaN")), None);
    }

    #[test]
    fn test_vertices_drop_unreadable_points() {
        #[derive(Deserialize)]
        struct Ring {
            #[serde(deserialize_with = "vertices")]
            polygon: Vec<[f64; 2]>,
        }

        let ring: Ring = serde_json::from_value(json!({
            "polygon": [[-3.70, 40.41], ["-3.69", "40.42"], [null, 1.0], [1.0]]
        }))
        .unwrap();
        assert_eq!(ring.polygon, vec![[-3.70, 40.41], [-3.69, 40.42]]);
    }

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default = "default_true", deserialize_with = "null_as_true")]
        active: bool,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let flags: Flags = serde_json::from_value(json!({ "active": null, "tags": null })).unwrap();
        assert!(flags.active);
        assert!(flags.tags.is_empty());

        let flags: Flags = serde_json::from_value(json!({})).unwrap();
        assert!(flags.active);

        let flags: Flags = serde_json::from_value(json!({ "active": false })).unwrap();
        assert!(!flags.active);
    }

    #[test]
    fn test_decode_records_skips_bad_entries() {
        let raw = json!([{ "tags": ["a"] }, { "active": "yes" }, 7, { "active": false }]).to_string();
        let flags: Vec<Flags> = decode_records(&raw, "flag").unwrap();
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0].tags, ["a"]);
        assert!(!flags[1].active);

        assert!(matches!(
            decode_records::<Flags>("{}", "flag"),
            Err(GuideError::InvalidCatalog { catalog: "flag", .. })
        ));
    }
}
