//! Domain vocabulary shared by the filter encoder, the document decoders and
//! the client.
//!
//! Every enumeration here carries the exact value Kitsu expects on the wire,
//! parses from it case-insensitively and displays as it.

pub mod filters;
pub mod genres;
pub mod profile;

pub use filters::{AgeRating, AnimeSubtype, FilterKind, FilterValue, MangaSubtype, Season};
pub use genres::Genre;
pub use profile::MediaProfile;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name a member of one of the domain
/// enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Media category of a catalog item.
///
/// # Examples
///
/// ```rust
/// use kitsu::domain::Media;
///
/// assert_eq!(Media::Anime.as_str(), "anime");
/// assert_eq!("Manga".parse::<Media>().unwrap(), Media::Manga);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    Anime,
    Manga,
}

impl Media {
    pub const ALL: [Self; 2] = [Self::Anime, Self::Manga];

    /// Path segment and `type` value used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }

    /// Capitalised form used by `filter[source_type]` on media relationships.
    #[must_use]
    pub const fn source_type(self) -> &'static str {
        match self {
            Self::Anime => "Anime",
            Self::Manga => "Manga",
        }
    }

    /// Category-specific rules: filter applicability, subtype set and
    /// decoders.
    #[must_use]
    pub fn profile(self) -> &'static MediaProfile {
        match self {
            Self::Anime => &profile::ANIME,
            Self::Manga => &profile::MANGA,
        }
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Media {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("media", s))
    }
}
