use super::ParseEnumError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! genre_table {
    ($($variant:ident = $id:literal, $slug:literal, $name:literal;)+) => {
        /// Kitsu genre (category) with its numeric id.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Genre {
            $($variant,)+
        }

        impl Genre {
            /// Every genre in table order. Decoded genre lists follow this
            /// order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn id(self) -> u32 {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            #[must_use]
            pub const fn from_id(id: u32) -> Option<Self> {
                match id {
                    $($id => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Value used inside `filter[categories]=...`.
            #[must_use]
            pub const fn slug(self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)+
                }
            }

            /// Human-readable name, e.g. `Slice Of Life`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

genre_table! {
    Action = 1, "action", "Action";
    Adventure = 2, "adventure", "Adventure";
    Comedy = 3, "comedy", "Comedy";
    Drama = 4, "drama", "Drama";
    SciFi = 5, "sci-fi", "Sci Fi";
    Space = 6, "space", "Space";
    Mystery = 7, "mystery", "Mystery";
    Magic = 8, "magic", "Magic";
    Supernatural = 9, "supernatural", "Supernatural";
    Police = 10, "police", "Police";
    Fantasy = 11, "fantasy", "Fantasy";
    Sports = 13, "sports", "Sports";
    Romance = 14, "romance", "Romance";
    SliceOfLife = 16, "slice-of-life", "Slice Of Life";
    Racing = 17, "racing", "Racing";
    Horror = 19, "horror", "Horror";
    Psychological = 20, "psychological", "Psychological";
    Thriller = 21, "thriller", "Thriller";
    MartialArts = 22, "martial-arts", "Martial Arts";
    SuperPower = 23, "super-power", "Super Power";
    School = 24, "school", "School";
    Ecchi = 25, "ecchi", "Ecchi";
    Vampire = 26, "vampire", "Vampire";
    Historical = 27, "historical", "Historical";
    Military = 28, "military", "Military";
    Dementia = 29, "dementia", "Dementia";
    Mecha = 30, "mecha", "Mecha";
    Demons = 31, "demons", "Demons";
    Samurai = 32, "samurai", "Samurai";
    Harem = 34, "harem", "Harem";
    Music = 35, "music", "Music";
    Parody = 36, "parody", "Parody";
    ShoujoAi = 37, "shoujo-ai", "Shoujo Ai";
    Game = 38, "game", "Game";
    ShounenAi = 39, "shounen-ai", "Shounen Ai";
    Kids = 40, "kids", "Kids";
    Hentai = 41, "hentai", "Hentai";
    Yuri = 42, "yuri", "Yuri";
    Yaoi = 43, "yaoi", "Yaoi";
    Gore = 49, "gore", "Gore";
    Isekai = 65, "isekai", "Isekai";
}

impl Genre {
    /// Resolves raw relationship ids to names in table order. Ids that are
    /// not numeric or not in the table are skipped.
    pub fn names_for_ids<'a, I>(ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wanted: Vec<u32> = ids
            .into_iter()
            .filter_map(|id| id.trim().parse().ok())
            .collect();

        Self::ALL
            .iter()
            .filter(|g| wanted.contains(&g.id()))
            .map(|g| g.name().to_string())
            .collect()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = ParseEnumError;

    /// Accepts the slug (`slice-of-life`), the name (`Slice Of Life`) or the
    /// snake form (`slice_of_life`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.slug() == normalized)
            .ok_or_else(|| ParseEnumError::new("genre", s))
    }
}

impl Serialize for Genre {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
