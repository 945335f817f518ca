//! Lenient readers for resource attributes.
//!
//! Every accessor returns `None` instead of failing when the key is absent,
//! null, or of an unexpected type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Reserved key the API adds to image maps (dimensions, not a size variant).
const IMAGE_META_KEY: &str = "meta";

#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a>(&'a Map<String, Value>);

impl<'a> Attributes<'a> {
    #[must_use]
    pub const fn new(map: &'a Map<String, Value>) -> Self {
        Self(map)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    #[must_use]
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Integer from a JSON number or a numeric string.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Non-negative integer that fits `u32` (counts, ranks).
    #[must_use]
    pub fn count(&self, key: &str) -> Option<u32> {
        self.int(key).and_then(|n| u32::try_from(n).ok())
    }

    #[must_use]
    pub fn id(&self, key: &str) -> Option<u64> {
        self.int(key).and_then(|n| u64::try_from(n).ok())
    }

    /// Float from a JSON number or a numeric string such as `"82.27"`.
    #[must_use]
    pub fn float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok().filter(|f: &f64| f.is_finite()),
            _ => None,
        }
    }

    #[must_use]
    pub fn date(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key).and_then(Value::as_str).and_then(parse_date)
    }

    /// String-valued object; non-string members are skipped.
    #[must_use]
    pub fn string_map(&self, key: &str) -> Option<BTreeMap<String, String>> {
        let object = self.get(key)?.as_object()?;
        Some(
            object
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect(),
        )
    }

    #[must_use]
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Image size variants keyed by size name, without the `meta` entry.
    #[must_use]
    pub fn images(&self, key: &str) -> Option<BTreeMap<String, String>> {
        self.string_map(key).map(|mut sizes| {
            sizes.remove(IMAGE_META_KEY);
            sizes
        })
    }

    /// The `original` variant of an image object.
    #[must_use]
    pub fn image_original(&self, key: &str) -> Option<String> {
        self.get(key)?
            .get("original")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[must_use]
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Parses the date forms the API emits.
///
/// RFC 3339 with `Z` or an explicit offset is read as-is; a date-time
/// without offset is taken as UTC; a bare `YYYY-MM-DD` is midnight UTC.
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
