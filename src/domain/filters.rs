use super::{Genre, ParseEnumError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed enumeration whose members map one-to-one onto wire
/// strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ParseEnumError::new($label, s))
            }
        }
    };
}

wire_enum! {
    /// Search criterion category. The wire value is the key inside
    /// `filter[...]`.
    FilterKind, "filter kind" {
        AgeRating => "ageRating",
        AverageRating => "averageRating",
        Genres => "categories",
        Season => "season",
        Year => "year",
        Subtype => "subtype",
    }
}

wire_enum! {
    AgeRating, "age rating" {
        G => "G",
        Pg => "PG",
        R => "R",
        R18 => "R18",
    }
}

wire_enum! {
    Season, "season" {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
    }
}

wire_enum! {
    AnimeSubtype, "anime subtype" {
        Ona => "ona",
        Ova => "ova",
        Tv => "tv",
        Movie => "movie",
        Music => "music",
        Special => "special",
    }
}

wire_enum! {
    MangaSubtype, "manga subtype" {
        Doujin => "doujin",
        Manga => "manga",
        Manhua => "manhua",
        Manhwa => "manhwa",
        Novel => "novel",
        Oel => "oel",
        Oneshot => "oneshot",
    }
}

/// A single raw criterion value as supplied by the caller.
///
/// The encoder decides per [`FilterKind`] which variants it accepts; a value
/// of the wrong variant for its kind is dropped.
///
/// Serialized externally tagged (`{"genre":"music"}`) since several members
/// share a wire string across enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    AgeRating(AgeRating),
    Season(Season),
    AnimeSubtype(AnimeSubtype),
    MangaSubtype(MangaSubtype),
    Genre(Genre),
    Number(i64),
}

impl FilterValue {
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Interprets a free-form subtype name. Anime subtypes win when a name
    /// exists in both sets (there is no such overlap today).
    pub fn parse_subtype(s: &str) -> Result<Self, ParseEnumError> {
        s.parse::<AnimeSubtype>()
            .map(Self::AnimeSubtype)
            .or_else(|_| s.parse::<MangaSubtype>().map(Self::MangaSubtype))
            .map_err(|_| ParseEnumError::new("subtype", s))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeRating(v) => v.fmt(f),
            Self::Season(v) => v.fmt(f),
            Self::AnimeSubtype(v) => v.fmt(f),
            Self::MangaSubtype(v) => v.fmt(f),
            Self::Genre(v) => f.write_str(&v.slug()),
            Self::Number(n) => n.fmt(f),
        }
    }
}

impl From<AgeRating> for FilterValue {
    fn from(v: AgeRating) -> Self {
        Self::AgeRating(v)
    }
}

impl From<Season> for FilterValue {
    fn from(v: Season) -> Self {
        Self::Season(v)
    }
}

impl From<AnimeSubtype> for FilterValue {
    fn from(v: AnimeSubtype) -> Self {
        Self::AnimeSubtype(v)
    }
}

impl From<MangaSubtype> for FilterValue {
    fn from(v: MangaSubtype) -> Self {
        Self::MangaSubtype(v)
    }
}

impl From<Genre> for FilterValue {
    fn from(v: Genre) -> Self {
        Self::Genre(v)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}
