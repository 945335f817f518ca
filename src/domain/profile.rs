//! Per-category lookup table.
//!
//! Everything that differs between anime and manga lives in one
//! [`MediaProfile`] value per category, so callers select behaviour with
//! `media.profile()` instead of branching on the category.

use super::{FilterKind, FilterValue, Media};
use crate::error::DecodeError;
use crate::models::{
    AnimeCharacter, AnimeModel, CharacterModel, Document, MangaCharacter, MangaModel, MediaModel,
};

pub struct MediaProfile {
    pub media: Media,
    /// Filter kinds the category accepts.
    pub filters: &'static [FilterKind],
    /// `include` list for the detail endpoint.
    pub detail_include: &'static str,
    /// `include` list for the character endpoint, if any.
    pub character_include: Option<&'static str>,
    accepts_subtype: fn(&FilterValue) -> bool,
    decode_media: fn(&Document) -> Result<MediaModel, DecodeError>,
    decode_character: fn(&Document) -> Result<CharacterModel, DecodeError>,
}

impl MediaProfile {
    #[must_use]
    pub fn applies(&self, kind: FilterKind) -> bool {
        self.filters.contains(&kind)
    }

    #[must_use]
    pub fn accepts_subtype(&self, value: &FilterValue) -> bool {
        (self.accepts_subtype)(value)
    }

    pub fn decode_media(&self, doc: &Document) -> Result<MediaModel, DecodeError> {
        (self.decode_media)(doc)
    }

    pub fn decode_character(&self, doc: &Document) -> Result<CharacterModel, DecodeError> {
        (self.decode_character)(doc)
    }
}

impl std::fmt::Debug for MediaProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaProfile")
            .field("media", &self.media)
            .field("filters", &self.filters)
            .field("detail_include", &self.detail_include)
            .field("character_include", &self.character_include)
            .finish_non_exhaustive()
    }
}

pub(super) static ANIME: MediaProfile = MediaProfile {
    media: Media::Anime,
    filters: &[
        FilterKind::AgeRating,
        FilterKind::AverageRating,
        FilterKind::Genres,
        FilterKind::Season,
        FilterKind::Year,
        FilterKind::Subtype,
    ],
    detail_include: "genres,animeProductions.producer,characters",
    character_include: Some("mediaCharacters.voices.person"),
    accepts_subtype: is_anime_subtype,
    decode_media: decode_anime,
    decode_character: decode_anime_character,
};

pub(super) static MANGA: MediaProfile = MediaProfile {
    media: Media::Manga,
    filters: &[
        FilterKind::AverageRating,
        FilterKind::Genres,
        FilterKind::Year,
        FilterKind::Subtype,
    ],
    detail_include: "genres,characters",
    character_include: None,
    accepts_subtype: is_manga_subtype,
    decode_media: decode_manga,
    decode_character: decode_manga_character,
};

fn is_anime_subtype(value: &FilterValue) -> bool {
    matches!(value, FilterValue::AnimeSubtype(_))
}

fn is_manga_subtype(value: &FilterValue) -> bool {
    matches!(value, FilterValue::MangaSubtype(_))
}

fn decode_anime(doc: &Document) -> Result<MediaModel, DecodeError> {
    AnimeModel::from_document(doc).map(MediaModel::Anime)
}

fn decode_manga(doc: &Document) -> Result<MediaModel, DecodeError> {
    MangaModel::from_document(doc).map(MediaModel::Manga)
}

fn decode_anime_character(doc: &Document) -> Result<CharacterModel, DecodeError> {
    AnimeCharacter::from_document(doc).map(CharacterModel::Anime)
}

fn decode_manga_character(doc: &Document) -> Result<CharacterModel, DecodeError> {
    MangaCharacter::from_document(doc).map(CharacterModel::Manga)
}
