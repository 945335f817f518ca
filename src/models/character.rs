use super::convert::parse_id;
use super::document::Document;
use crate::constants::record_types;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: Option<u64>,
    pub slug: Option<String>,
    pub names: Option<BTreeMap<String, String>>,
    pub canonical_name: Option<String>,
    pub other_names: Option<Vec<String>>,
    pub name: Option<String>,
    pub mal_id: Option<u64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Character {
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        let data = doc.primary()?;
        let a = data.attributes();

        Ok(Self {
            id: parse_id(&data.id),
            slug: a.string("slug"),
            names: a.string_map("names"),
            canonical_name: a.string("canonicalName"),
            other_names: a.string_list("otherNames"),
            name: a.string("name"),
            mal_id: a.id("malId"),
            description: a.string("description"),
            image: a.image_original("image"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceActor {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeCharacter {
    #[serde(flatten)]
    pub character: Character,
    /// Voice actor per locale (`ja_jp`, `en`, ...).
    pub voice_actors: BTreeMap<String, VoiceActor>,
}

impl AnimeCharacter {
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        Ok(Self {
            character: Character::from_document(doc)?,
            voice_actors: voice_actors(doc)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MangaCharacter(pub Character);

impl MangaCharacter {
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        Character::from_document(doc).map(Self)
    }
}

/// Pairs `characterVoices` locales with `people` records by position.
///
/// The API lists both in the same order but carries no shared key between
/// the two sequences, so differing lengths are rejected rather than
/// truncated.
fn voice_actors(doc: &Document) -> Result<BTreeMap<String, VoiceActor>, DecodeError> {
    let voices: Vec<_> = doc.included_of_type(record_types::CHARACTER_VOICES).collect();
    let people: Vec<_> = doc.included_of_type(record_types::PEOPLE).collect();

    if voices.len() != people.len() {
        return Err(DecodeError::LengthMismatch {
            left: record_types::CHARACTER_VOICES,
            left_len: voices.len(),
            right: record_types::PEOPLE,
            right_len: people.len(),
        });
    }

    Ok(voices
        .iter()
        .zip(&people)
        .filter_map(|(voice, person)| {
            let locale = voice.attributes().string("locale")?;
            let a = person.attributes();
            Some((
                locale,
                VoiceActor {
                    name: a.string("name"),
                    description: a.string("description"),
                    image: a.image_original("image"),
                },
            ))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn character_doc(included: serde_json::Value) -> Document {
        Document::from_value(json!({
            "data": {
                "id": "1",
                "type": "characters",
                "attributes": {
                    "slug": "spike-spiegel",
                    "names": { "en": "Spike Spiegel", "ja_jp": "スパイク・スピーゲル" },
                    "canonicalName": "Spike Spiegel",
                    "otherNames": ["Swimming Bird"],
                    "name": "Spike Spiegel",
                    "malId": 1,
                    "description": "Bounty hunter.",
                    "image": { "original": "https://media.kitsu.io/characters/images/1/original.jpg" }
                }
            },
            "included": included
        }))
        .unwrap()
    }

    #[test]
    fn reads_character_attributes() {
        let character = Character::from_document(&character_doc(json!([]))).unwrap();
        assert_eq!(character.id, Some(1));
        assert_eq!(character.mal_id, Some(1));
        assert_eq!(character.names.as_ref().unwrap()["en"], "Spike Spiegel");
        assert_eq!(character.other_names, Some(vec!["Swimming Bird".to_string()]));
        assert!(character.image.unwrap().ends_with("original.jpg"));
    }

    #[test]
    fn null_image_is_none() {
        let doc = Document::from_value(json!({
            "data": { "id": "2", "type": "characters", "attributes": { "image": null } }
        }))
        .unwrap();
        assert_eq!(Character::from_document(&doc).unwrap().image, None);
    }

    #[test]
    fn pairs_locales_with_people_in_order() {
        let doc = character_doc(json!([
            { "id": "50", "type": "characterVoices", "attributes": { "locale": "ja_jp" } },
            { "id": "51", "type": "characterVoices", "attributes": { "locale": "en" } },
            { "id": "7", "type": "people", "attributes": { "name": "Kouichi Yamadera", "description": null, "image": null } },
            { "id": "8", "type": "people", "attributes": { "name": "Steven Blum", "description": "Voice actor.", "image": { "original": "blum.jpg" } } }
        ]));

        let character = AnimeCharacter::from_document(&doc).unwrap();
        assert_eq!(character.voice_actors.len(), 2);
        assert_eq!(
            character.voice_actors["ja_jp"].name.as_deref(),
            Some("Kouichi Yamadera")
        );
        let en = &character.voice_actors["en"];
        assert_eq!(en.name.as_deref(), Some("Steven Blum"));
        assert_eq!(en.description.as_deref(), Some("Voice actor."));
        assert_eq!(en.image.as_deref(), Some("blum.jpg"));
    }

    #[test]
    fn mismatched_voice_lists_are_an_error() {
        let doc = character_doc(json!([
            { "id": "50", "type": "characterVoices", "attributes": { "locale": "ja_jp" } },
            { "id": "51", "type": "characterVoices", "attributes": { "locale": "en" } },
            { "id": "7", "type": "people", "attributes": { "name": "Kouichi Yamadera" } }
        ]));

        match AnimeCharacter::from_document(&doc) {
            Err(DecodeError::LengthMismatch {
                left_len,
                right_len,
                ..
            }) => assert_eq!((left_len, right_len), (2, 1)),
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn manga_character_ignores_included() {
        let doc = character_doc(json!([
            { "id": "50", "type": "characterVoices", "attributes": { "locale": "ja_jp" } }
        ]));
        let character = MangaCharacter::from_document(&doc).unwrap();
        assert_eq!(character.0.slug.as_deref(), Some("spike-spiegel"));
    }
}
