use chrono::{TimeZone, Utc};
use kitsu::error::{DecodeError, KitsuError};
use kitsu::models::{
    AnimeCharacter, AnimeModel, Document, Franchise, MangaCharacter, MangaModel, SearchPage,
    ToJson,
};
use serde_json::{Value, json};
use std::num::NonZeroU32;

fn cowboy_bebop() -> Value {
    json!({
        "data": {
            "id": "1",
            "type": "anime",
            "attributes": {
                "createdAt": "2013-02-20T16:00:13.609Z",
                "updatedAt": "2024-05-01T06:00:10.123Z",
                "slug": "cowboy-bebop",
                "synopsis": "In the year 2071, humanity has colonized several of the planets.",
                "description": "In the year 2071, humanity has colonized several of the planets.",
                "coverImageTopOffset": 400,
                "titles": { "en": "Cowboy Bebop", "en_jp": "Cowboy Bebop", "ja_jp": "カウボーイビバップ" },
                "canonicalTitle": "Cowboy Bebop",
                "abbreviatedTitles": ["COWBOY BEBOP"],
                "averageRating": "82.27",
                "ratingFrequencies": { "2": "4470", "20": "56847" },
                "userCount": 160000,
                "favoritesCount": 4800,
                "startDate": "1998-04-03",
                "endDate": "1999-04-24",
                "nextRelease": null,
                "popularityRank": 32,
                "ratingRank": 28,
                "ageRating": "R",
                "ageRatingGuide": "17+ (violence & profanity)",
                "subtype": "TV",
                "status": "finished",
                "tba": "",
                "posterImage": {
                    "tiny": "https://media.kitsu.io/anime/poster_images/1/tiny.jpg",
                    "original": "https://media.kitsu.io/anime/poster_images/1/original.jpg",
                    "meta": { "dimensions": { "tiny": { "width": 110, "height": 156 } } }
                },
                "coverImage": null,
                "episodeCount": 26,
                "episodeLength": 25,
                "youtubeVideoId": "qig4KOK2R2g"
            },
            "relationships": {
                "genres": {
                    "data": [
                        { "id": "6", "type": "genres" },
                        { "id": "1", "type": "genres" },
                        { "id": "3", "type": "genres" }
                    ]
                },
                "characters": {
                    "data": [
                        { "id": "10", "type": "mediaCharacters" },
                        { "id": "11", "type": "mediaCharacters" }
                    ]
                }
            }
        },
        "included": [
            { "id": "1", "type": "genres", "attributes": { "name": "Action" } },
            { "id": "10", "type": "mediaCharacters", "attributes": { "role": "main" } },
            { "id": "11", "type": "mediaCharacters", "attributes": { "role": "supporting" } },
            { "id": "12", "type": "mediaCharacters", "attributes": { "role": "main" } },
            {
                "id": "500",
                "type": "animeProductions",
                "attributes": { "role": "studio" },
                "relationships": { "producer": { "data": { "id": "14", "type": "producers" } } }
            },
            {
                "id": "501",
                "type": "animeProductions",
                "attributes": { "role": "producer" },
                "relationships": { "producer": { "data": { "id": "15", "type": "producers" } } }
            },
            {
                "id": "502",
                "type": "animeProductions",
                "attributes": { "role": "licensor" },
                "relationships": { "producer": { "data": { "id": "16", "type": "producers" } } }
            },
            { "id": "14", "type": "producers", "attributes": { "name": "Sunrise" } },
            { "id": "15", "type": "producers", "attributes": { "name": "Bandai Visual" } },
            { "id": "16", "type": "producers", "attributes": { "name": "Funimation" } }
        ]
    })
}

#[test]
fn decodes_full_anime_document() {
    let doc = Document::from_value(cowboy_bebop()).unwrap();
    let anime = AnimeModel::from_document(&doc).unwrap();
    let base = &anime.base;

    assert_eq!(base.id, Some(1));
    assert_eq!(base.kind.as_deref(), Some("anime"));
    assert_eq!(base.canonical_title.as_deref(), Some("Cowboy Bebop"));
    assert_eq!(base.average_rating, Some(82.27));
    assert_eq!(base.user_count, Some(160_000));
    assert_eq!(base.cover_image_top_offset, Some(400));
    assert_eq!(
        base.start_date,
        Some(Utc.with_ymd_and_hms(1998, 4, 3, 0, 0, 0).unwrap())
    );
    assert_eq!(base.next_release, None);
    assert_eq!(base.cover_images, None);

    let poster = base.poster_images.as_ref().unwrap();
    assert_eq!(poster.len(), 2);
    assert!(!poster.contains_key("meta"));

    // Genre names come from the built-in table, in table order.
    assert_eq!(base.genres, vec!["Action", "Comedy", "Space"]);

    assert_eq!(base.main_characters, vec![10, 12]);
    assert_eq!(base.supporting_characters, vec![11]);

    assert_eq!(anime.episode_count, Some(26));
    assert_eq!(anime.episode_length, Some(25));
    assert_eq!(anime.studios, vec!["Sunrise"]);
    assert_eq!(anime.producers, vec!["Bandai Visual"]);
    assert_eq!(anime.licensors, vec!["Funimation"]);
}

#[test]
fn json_projection_has_rfc3339_dates_and_flat_fields() {
    let doc = Document::from_value(cowboy_bebop()).unwrap();
    let anime = AnimeModel::from_document(&doc).unwrap();

    let projected: Value = serde_json::from_str(&anime.to_json().unwrap()).unwrap();
    assert_eq!(projected["type"], "anime");
    assert_eq!(projected["canonical_title"], "Cowboy Bebop");
    assert_eq!(projected["start_date"], "1998-04-03T00:00:00Z");
    assert_eq!(projected["episode_count"], 26);
    assert!(projected["next_release"].is_null());
    assert!(projected.get("base").is_none());

    let back: AnimeModel = serde_json::from_value(projected).unwrap();
    assert_eq!(back, anime);
}

#[test]
fn manga_without_relationships_has_empty_collections() {
    let doc = Document::from_value(json!({
        "data": {
            "id": "21",
            "type": "manga",
            "attributes": {
                "canonicalTitle": "Berserk",
                "chapterCount": 364,
                "volumeCount": 41,
                "serialization": "Young Animal",
                "startDate": "1989-08-25"
            }
        }
    }))
    .unwrap();

    let manga = MangaModel::from_document(&doc).unwrap();
    assert_eq!(manga.base.id, Some(21));
    assert_eq!(manga.chapter_count, Some(364));
    assert_eq!(manga.volume_count, Some(41));
    assert_eq!(manga.serialization.as_deref(), Some("Young Animal"));
    assert!(manga.base.genres.is_empty());
    assert!(manga.base.main_characters.is_empty());
    assert!(manga.base.supporting_characters.is_empty());
}

#[test]
fn error_envelope_is_an_api_error() {
    let err = Document::from_value(json!({
        "errors": [{ "title": "Record not found", "detail": "The record identified by 0 could not be found.", "code": "404", "status": "404" }]
    }))
    .unwrap_err();

    let api = err.api_error().unwrap();
    assert_eq!(api.title, "Record not found");
    assert_eq!(api.code, 404);
    assert_eq!(api.status, 404);
}

#[test]
fn body_without_data_is_a_decode_error() {
    let err = Document::from_value(json!({ "meta": { "count": 0 } })).unwrap_err();
    assert!(matches!(err, KitsuError::Decode(DecodeError::MissingData)));

    let err = Document::from_json("not json").unwrap_err();
    assert!(matches!(err, KitsuError::Decode(DecodeError::Json(_))));
}

#[test]
fn anime_character_pairs_voices_with_people() {
    let doc = Document::from_value(json!({
        "data": {
            "id": "1",
            "type": "characters",
            "attributes": { "canonicalName": "Spike Spiegel", "malId": 1, "image": null }
        },
        "included": [
            { "id": "5", "type": "mediaCharacters", "attributes": { "role": "main" } },
            { "id": "50", "type": "characterVoices", "attributes": { "locale": "ja_jp" } },
            { "id": "51", "type": "characterVoices", "attributes": { "locale": "en" } },
            { "id": "90", "type": "people", "attributes": { "name": "Kouichi Yamadera" } },
            { "id": "91", "type": "people", "attributes": { "name": "Steven Blum", "image": { "original": "blum.jpg" } } }
        ]
    }))
    .unwrap();

    let character = AnimeCharacter::from_document(&doc).unwrap();
    assert_eq!(character.character.canonical_name.as_deref(), Some("Spike Spiegel"));
    assert_eq!(character.character.image, None);
    assert_eq!(character.voice_actors.len(), 2);
    assert_eq!(
        character.voice_actors["ja_jp"].name.as_deref(),
        Some("Kouichi Yamadera")
    );
    assert_eq!(character.voice_actors["en"].image.as_deref(), Some("blum.jpg"));
}

#[test]
fn voice_and_people_counts_must_agree() {
    let doc = Document::from_value(json!({
        "data": { "id": "1", "type": "characters", "attributes": {} },
        "included": [
            { "id": "50", "type": "characterVoices", "attributes": { "locale": "ja_jp" } },
            { "id": "51", "type": "characterVoices", "attributes": { "locale": "en" } },
            { "id": "90", "type": "people", "attributes": { "name": "Kouichi Yamadera" } }
        ]
    }))
    .unwrap();

    let err = AnimeCharacter::from_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::LengthMismatch {
            left_len: 2,
            right_len: 1,
            ..
        }
    ));
}

#[test]
fn manga_character_projects_as_plain_character() {
    let doc = Document::from_value(json!({
        "data": { "id": "7", "type": "characters", "attributes": { "name": "Guts" } }
    }))
    .unwrap();

    let character = MangaCharacter::from_document(&doc).unwrap();
    let projected: Value = serde_json::from_str(&character.to_json().unwrap()).unwrap();
    assert_eq!(projected["id"], 7);
    assert_eq!(projected["name"], "Guts");
    assert!(projected.get("voice_actors").is_none());
}

#[test]
fn franchise_lengths_must_agree() {
    let doc = Document::from_value(json!({
        "data": [
            { "id": "1", "type": "mediaRelationships", "attributes": { "role": "sequel" } }
        ],
        "included": []
    }))
    .unwrap();

    assert!(matches!(
        Franchise::list_from_document(&doc),
        Err(DecodeError::LengthMismatch { .. })
    ));
}

#[test]
fn franchise_projection_is_flat() {
    let doc = Document::from_value(json!({
        "data": [
            { "id": "1", "type": "mediaRelationships", "attributes": { "role": "prequel" } }
        ],
        "included": [
            { "id": "4", "type": "anime", "attributes": { "canonicalTitle": "Cowboy Bebop: Tengoku no Tobira", "subtype": "movie" } }
        ]
    }))
    .unwrap();

    let franchises = Franchise::list_from_document(&doc).unwrap();
    let projected: Value = serde_json::from_str(&franchises.to_json().unwrap()).unwrap();
    assert_eq!(projected[0]["role"], "prequel");
    assert_eq!(projected[0]["id"], 4);
    assert_eq!(projected[0]["subtype"], "movie");
}

#[test]
fn search_page_counts_pages() {
    let doc = Document::from_value(json!({
        "data": [
            { "id": "1", "type": "anime", "attributes": { "canonicalTitle": "Cowboy Bebop" } },
            { "id": "2", "type": "anime", "attributes": { "canonicalTitle": "Trigun" } }
        ],
        "meta": { "count": 41 },
        "links": { "next": "https://kitsu.io/api/edge/anime?page[offset]=2" }
    }))
    .unwrap();

    let page = SearchPage::from_document(&doc, 1, NonZeroU32::new(2).unwrap()).unwrap();
    assert_eq!(page.total_result, 41);
    assert_eq!(page.total_page, 21);
    assert!(page.has_next());
    assert_eq!(page.results[1].canonical_title.as_deref(), Some("Trigun"));

    let empty = Document::from_value(json!({ "data": [], "meta": { "count": 0 } })).unwrap();
    let page = SearchPage::from_document(&empty, 1, NonZeroU32::new(10).unwrap()).unwrap();
    assert_eq!(page.total_page, 0);
    assert!(page.results.is_empty());
    assert!(!page.has_next());
}
