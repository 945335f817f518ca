//! JSON:API compound documents as Kitsu returns them.
//!
//! Attributes are kept as a raw JSON map: the entity decoders read them with
//! the lenient accessors in [`Attributes`] so a surprising value type degrades
//! to an absent field instead of failing the whole document.

use super::convert::Attributes;
use crate::error::{ApiError, DecodeError, KitsuError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// `{ "type": ..., "id": ... }` reference inside a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    Many(Vec<ResourceIdentifier>),
    One(ResourceIdentifier),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<Linkage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: BTreeMap<String, Relationship>,
}

impl Resource {
    #[must_use]
    pub const fn attributes(&self) -> Attributes<'_> {
        Attributes::new(&self.attributes)
    }

    /// Ids referenced by a relationship, whether it links one record or many.
    #[must_use]
    pub fn related_ids(&self, name: &str) -> Vec<&str> {
        match self.relationships.get(name).and_then(|r| r.data.as_ref()) {
            Some(Linkage::Many(ids)) => ids.iter().map(|i| i.id.as_str()).collect(),
            Some(Linkage::One(id)) => vec![id.id.as_str()],
            None => Vec::new(),
        }
    }

    /// Id of a to-one relationship.
    #[must_use]
    pub fn related_id(&self, name: &str) -> Option<&str> {
        match self.relationships.get(name)?.data.as_ref()? {
            Linkage::One(id) => Some(id.id.as_str()),
            Linkage::Many(_) => None,
        }
    }

    /// Role tag carried by linking records such as `mediaCharacters`.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.attributes.get("role").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Many(Vec<Resource>),
    One(Resource),
}

// Dispatches on the JSON shape by hand so a malformed record reports its own
// error instead of "did not match any variant".
impl<'de> Deserialize<'de> for PrimaryData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_json::from_value(item)
                        .map_err(|e| D::Error::custom(format!("data[{i}]: {e}")))
                })
                .collect::<Result<_, _>>()
                .map(Self::Many),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Self::One)
                .map_err(|e| D::Error::custom(format!("data: {e}"))),
            other => Err(D::Error::custom(format!(
                "expected a resource or a resource list, found {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub data: PrimaryData,
    pub included: Vec<Resource>,
    pub meta: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    data: Option<PrimaryData>,
    #[serde(default, deserialize_with = "null_as_default")]
    included: Vec<Resource>,
    #[serde(default, deserialize_with = "null_as_default")]
    meta: Map<String, Value>,
}

impl Document {
    /// Single entry point from a raw response body.
    ///
    /// An `errors` envelope becomes [`KitsuError::Api`]; a body without
    /// primary data is a [`DecodeError`].
    pub fn from_value(value: Value) -> Result<Self, KitsuError> {
        if let Some(err) = ApiError::from_envelope(&value, None) {
            return Err(KitsuError::Api(err));
        }

        let raw: RawDocument = serde_json::from_value(value).map_err(DecodeError::from)?;
        let data = raw.data.ok_or(DecodeError::MissingData)?;

        Ok(Self {
            data,
            included: raw.included,
            meta: raw.meta,
        })
    }

    pub fn from_json(body: &str) -> Result<Self, KitsuError> {
        let value: Value = serde_json::from_str(body).map_err(DecodeError::from)?;
        Self::from_value(value)
    }

    /// The primary record of a single-resource document.
    pub fn primary(&self) -> Result<&Resource, DecodeError> {
        match &self.data {
            PrimaryData::One(resource) => Ok(resource),
            PrimaryData::Many(_) => Err(DecodeError::UnexpectedShape {
                expected: "a single resource",
            }),
        }
    }

    /// The primary records of a collection document.
    pub fn records(&self) -> Result<&[Resource], DecodeError> {
        match &self.data {
            PrimaryData::Many(resources) => Ok(resources),
            PrimaryData::One(_) => Err(DecodeError::UnexpectedShape {
                expected: "a resource list",
            }),
        }
    }

    /// Included records of one type, in document order.
    pub fn included_of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Resource> {
        self.included.iter().filter(move |r| r.kind == kind)
    }

    /// `meta.count` of a collection document.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        match self.meta.get("count")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, found {other}"
        ))),
    }
}
