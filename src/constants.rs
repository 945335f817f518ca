pub const KITSU_API: &str = "https://kitsu.io/api/edge";

pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Record `type` values found in compound documents.
pub mod record_types {

    pub const MEDIA_CHARACTERS: &str = "mediaCharacters";

    pub const ANIME_PRODUCTIONS: &str = "animeProductions";

    pub const PRODUCERS: &str = "producers";

    pub const CHARACTER_VOICES: &str = "characterVoices";

    pub const PEOPLE: &str = "people";
}

/// Role values carried by linking records.
pub mod roles {

    pub const MAIN: &str = "main";

    pub const SUPPORTING: &str = "supporting";

    pub const PRODUCER: &str = "producer";

    pub const LICENSOR: &str = "licensor";

    pub const STUDIO: &str = "studio";
}

/// Inclusive bounds accepted by the numeric filters.
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const AVERAGE_RATING: RangeInclusive<i64> = 5..=100;

    pub const YEAR: RangeInclusive<i64> = 1868..=2030;
}

pub mod limits {

    pub const DEFAULT_PAGE_LIMIT: u32 = 10;

    /// Largest `page[limit]` Kitsu honours.
    pub const MAX_PAGE_LIMIT: u32 = 20;
}
