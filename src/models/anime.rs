use super::base::BaseModel;
use super::document::Document;
use crate::constants::{record_types, roles};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeModel {
    #[serde(flatten)]
    pub base: BaseModel,
    pub episode_count: Option<u32>,
    pub episode_length: Option<u32>,
    pub youtube_video_id: Option<String>,
    pub producers: Vec<String>,
    pub licensors: Vec<String>,
    pub studios: Vec<String>,
}

impl AnimeModel {
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        let base = BaseModel::from_document(doc)?;
        let a = doc.primary()?.attributes();

        Ok(Self {
            base,
            episode_count: a.count("episodeCount"),
            episode_length: a.count("episodeLength"),
            youtube_video_id: a.string("youtubeVideoId"),
            producers: producer_names(doc, roles::PRODUCER),
            licensors: producer_names(doc, roles::LICENSOR),
            studios: producer_names(doc, roles::STUDIO),
        })
    }
}

/// Names of the `producers` records linked through an `animeProductions`
/// record carrying `role`.
fn producer_names(doc: &Document, role: &str) -> Vec<String> {
    let ids: HashSet<&str> = doc
        .included_of_type(record_types::ANIME_PRODUCTIONS)
        .filter(|link| link.role() == Some(role))
        .filter_map(|link| link.related_id("producer"))
        .collect();

    if ids.is_empty() {
        return Vec::new();
    }

    doc.included_of_type(record_types::PRODUCERS)
        .filter(|producer| ids.contains(producer.id.as_str()))
        .filter_map(|producer| producer.attributes().string("name"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn production(id: &str, role: &str, producer: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": "animeProductions",
            "attributes": { "role": role },
            "relationships": { "producer": { "data": { "id": producer, "type": "producers" } } }
        })
    }

    fn producer(id: &str, name: &str) -> serde_json::Value {
        json!({ "id": id, "type": "producers", "attributes": { "name": name } })
    }

    #[test]
    fn resolves_each_role_separately() {
        let doc = Document::from_value(json!({
            "data": {
                "id": "1",
                "type": "anime",
                "attributes": { "episodeCount": 26, "episodeLength": 24, "youtubeVideoId": "qig4KOK2R2g" }
            },
            "included": [
                production("100", "producer", "1"),
                production("101", "licensor", "2"),
                production("102", "studio", "3"),
                production("103", "producer", "2"),
                producer("1", "Bandai Visual"),
                producer("2", "Funimation"),
                producer("3", "Sunrise")
            ]
        }))
        .unwrap();

        let anime = AnimeModel::from_document(&doc).unwrap();
        assert_eq!(anime.episode_count, Some(26));
        assert_eq!(anime.episode_length, Some(24));
        assert_eq!(anime.youtube_video_id.as_deref(), Some("qig4KOK2R2g"));
        assert_eq!(anime.producers, vec!["Bandai Visual", "Funimation"]);
        assert_eq!(anime.licensors, vec!["Funimation"]);
        assert_eq!(anime.studios, vec!["Sunrise"]);
    }

    #[test]
    fn duplicate_links_yield_one_name() {
        let doc = Document::from_value(json!({
            "data": { "id": "1", "type": "anime", "attributes": {} },
            "included": [
                production("100", "producer", "7"),
                production("101", "producer", "7"),
                producer("7", "Aniplex")
            ]
        }))
        .unwrap();

        let anime = AnimeModel::from_document(&doc).unwrap();
        assert_eq!(anime.producers, vec!["Aniplex"]);
        assert!(anime.licensors.is_empty());
        assert!(anime.studios.is_empty());
    }

    #[test]
    fn links_without_producer_are_ignored() {
        let doc = Document::from_value(json!({
            "data": { "id": "1", "type": "anime" },
            "included": [
                { "id": "100", "type": "animeProductions", "attributes": { "role": "studio" } },
                producer("7", "Madhouse")
            ]
        }))
        .unwrap();

        assert!(AnimeModel::from_document(&doc).unwrap().studios.is_empty());
    }
}
