use super::convert::parse_id;
use super::document::{Document, Resource};
use crate::constants::{record_types, roles};
use crate::domain::Genre;
use crate::error::DecodeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attributes shared by anime and manga detail documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseModel {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub slug: Option<String>,
    pub synopsis: Option<String>,
    pub description: Option<String>,
    pub cover_image_top_offset: Option<i64>,
    pub titles: Option<BTreeMap<String, String>>,
    pub canonical_title: Option<String>,
    pub abbreviated_titles: Option<Vec<String>>,
    pub average_rating: Option<f64>,
    pub rating_frequencies: Option<BTreeMap<String, String>>,
    pub user_count: Option<u32>,
    pub favorites_count: Option<u32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub next_release: Option<DateTime<Utc>>,
    pub popularity_rank: Option<u32>,
    pub rating_rank: Option<u32>,
    pub age_rating: Option<String>,
    pub age_rating_guide: Option<String>,
    pub subtype: Option<String>,
    pub status: Option<String>,
    pub tba: Option<String>,
    pub poster_images: Option<BTreeMap<String, String>>,
    pub cover_images: Option<BTreeMap<String, String>>,
    pub genres: Vec<String>,
    pub main_characters: Vec<u64>,
    pub supporting_characters: Vec<u64>,
}

impl BaseModel {
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        let data = doc.primary()?;
        let a = data.attributes();

        Ok(Self {
            id: parse_id(&data.id),
            kind: non_empty(&data.kind),
            created_at: a.date("createdAt"),
            updated_at: a.date("updatedAt"),
            slug: a.string("slug"),
            synopsis: a.string("synopsis"),
            description: a.string("description"),
            cover_image_top_offset: a.int("coverImageTopOffset"),
            titles: a.string_map("titles"),
            canonical_title: a.string("canonicalTitle"),
            abbreviated_titles: a.string_list("abbreviatedTitles"),
            average_rating: a.float("averageRating"),
            rating_frequencies: a.string_map("ratingFrequencies"),
            user_count: a.count("userCount"),
            favorites_count: a.count("favoritesCount"),
            start_date: a.date("startDate"),
            end_date: a.date("endDate"),
            next_release: a.date("nextRelease"),
            popularity_rank: a.count("popularityRank"),
            rating_rank: a.count("ratingRank"),
            age_rating: a.string("ageRating"),
            age_rating_guide: a.string("ageRatingGuide"),
            subtype: a.string("subtype"),
            status: a.string("status"),
            tba: a.string("tba"),
            poster_images: a.images("posterImage"),
            cover_images: a.images("coverImage"),
            genres: Genre::names_for_ids(data.related_ids("genres")),
            main_characters: character_ids(doc, roles::MAIN),
            supporting_characters: character_ids(doc, roles::SUPPORTING),
        })
    }
}

/// Ids of the `mediaCharacters` links holding `role`.
fn character_ids(doc: &Document, role: &str) -> Vec<u64> {
    doc.included_of_type(record_types::MEDIA_CHARACTERS)
        .filter(|link| link.role() == Some(role))
        .filter_map(|link| parse_id(&link.id))
        .collect()
}

/// Reduced projection used by collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralResult {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub titles: Option<BTreeMap<String, String>>,
    pub canonical_title: Option<String>,
    pub average_rating: Option<f64>,
    pub popularity_rank: Option<u32>,
    pub rating_rank: Option<u32>,
    pub subtype: Option<String>,
    pub status: Option<String>,
    pub poster_images: Option<BTreeMap<String, String>>,
    pub cover_images: Option<BTreeMap<String, String>>,
}

impl GeneralResult {
    #[must_use]
    pub fn from_resource(resource: &Resource) -> Self {
        let a = resource.attributes();

        Self {
            id: parse_id(&resource.id),
            kind: non_empty(&resource.kind),
            titles: a.string_map("titles"),
            canonical_title: a.string("canonicalTitle"),
            average_rating: a.float("averageRating"),
            popularity_rank: a.count("popularityRank"),
            rating_rank: a.count("ratingRank"),
            subtype: a.string("subtype"),
            status: a.string("status"),
            poster_images: a.images("posterImage"),
            cover_images: a.images("coverImage"),
        }
    }
}

pub(crate) fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
