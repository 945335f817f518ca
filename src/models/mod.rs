//! Typed entities decoded from Kitsu compound documents.
//!
//! Entities are plain snapshots: built once from a [`Document`], owned by the
//! caller, with no reference back to the document.

pub mod anime;
pub mod base;
pub mod character;
pub mod convert;
pub mod document;
pub mod franchise;
pub mod manga;
pub mod search;

pub use anime::AnimeModel;
pub use base::{BaseModel, GeneralResult};
pub use character::{AnimeCharacter, Character, MangaCharacter, VoiceActor};
pub use document::{Document, Resource};
pub use franchise::Franchise;
pub use manga::MangaModel;
pub use search::SearchPage;

use serde::Serialize;

/// Pretty JSON projection of an entity. Dates render as RFC 3339 strings.
pub trait ToJson: Serialize {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ToJson for BaseModel {}
impl ToJson for AnimeModel {}
impl ToJson for MangaModel {}
impl ToJson for Character {}
impl ToJson for AnimeCharacter {}
impl ToJson for MangaCharacter {}
impl ToJson for GeneralResult {}
impl ToJson for Franchise {}
impl ToJson for SearchPage {}
impl ToJson for MediaModel {}
impl ToJson for CharacterModel {}
impl ToJson for Vec<Franchise> {}

/// Detail entity whose variant is picked by media category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaModel {
    Anime(AnimeModel),
    Manga(MangaModel),
}

impl MediaModel {
    #[must_use]
    pub const fn base(&self) -> &BaseModel {
        match self {
            Self::Anime(anime) => &anime.base,
            Self::Manga(manga) => &manga.base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CharacterModel {
    Anime(AnimeCharacter),
    Manga(MangaCharacter),
}

impl CharacterModel {
    #[must_use]
    pub const fn character(&self) -> &Character {
        match self {
            Self::Anime(c) => &c.character,
            Self::Manga(c) => &c.0,
        }
    }
}
