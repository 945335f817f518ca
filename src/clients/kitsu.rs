use crate::config::ApiConfig;
use crate::constants::{JSON_API_MEDIA_TYPE, KITSU_API, limits};
use crate::domain::Media;
use crate::error::{ApiError, KitsuError, Result};
use crate::models::{
    AnimeModel, CharacterModel, Document, Franchise, MangaModel, MediaModel, SearchPage,
};
use crate::query::{self, Filters};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::debug;

/// Sort orders offered by the browse endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowseSort {
    Popularity,
    TopRated,
    Upcoming,
    Latest,
}

impl BrowseSort {
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Popularity => "-user_count",
            Self::TopRated => "-averageRating",
            Self::Upcoming => "-startDate",
            Self::Latest => "-created_at",
        }
    }
}

/// Page selection plus optional filters for a browse request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOptions {
    /// 1-based page number; 0 is read as 1.
    pub page: u32,
    pub limit: NonZeroU32,
    pub filters: Filters,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            page: 1,
            limit: NonZeroU32::new(limits::DEFAULT_PAGE_LIMIT).unwrap_or(NonZeroU32::MIN),
            filters: Filters::new(),
        }
    }
}

impl BrowseOptions {
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: NonZeroU32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }
}

/// `page[limit]` / `page[offset]` pair for a 1-based page.
fn page_query(page: u32, limit: NonZeroU32) -> String {
    let limit = limit.get();
    let offset = u64::from(limit) * u64::from(page.max(1) - 1);
    format!("page[limit]={limit}&page[offset]={offset}")
}

#[derive(Clone)]
pub struct KitsuClient {
    client: Client,
    base_url: String,
}

impl KitsuClient {
    /// Client for the public API with the crate's own user agent.
    pub fn new() -> Result<Self> {
        Self::build(
            concat!("kitsu/", env!("CARGO_PKG_VERSION")),
            None,
            KITSU_API,
        )
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::build(
            &config.user_agent,
            Some(Duration::from_secs(config.timeout_seconds)),
            &config.base_url,
        )
    }

    fn build(user_agent: &str, timeout: Option<Duration>, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder()
            .default_headers(json_api_headers())
            .user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Points the client at another API root (mirrors, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, path_and_query: &str) -> Result<Document> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let envelope = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| ApiError::from_envelope(&v, Some(status.as_u16())));

            return Err(envelope.map_or_else(
                || KitsuError::Status {
                    status: status.as_u16(),
                    body,
                },
                KitsuError::Api,
            ));
        }

        Document::from_json(&body)
    }

    pub async fn anime(&self, id: u64) -> Result<AnimeModel> {
        let include = Media::Anime.profile().detail_include;
        let doc = self.fetch(&format!("anime/{id}?include={include}")).await?;
        Ok(AnimeModel::from_document(&doc)?)
    }

    pub async fn manga(&self, id: u64) -> Result<MangaModel> {
        let include = Media::Manga.profile().detail_include;
        let doc = self.fetch(&format!("manga/{id}?include={include}")).await?;
        Ok(MangaModel::from_document(&doc)?)
    }

    /// Detail document for either category.
    pub async fn media(&self, media: Media, id: u64) -> Result<MediaModel> {
        let profile = media.profile();
        let doc = self
            .fetch(&format!("{media}/{id}?include={}", profile.detail_include))
            .await?;
        Ok(profile.decode_media(&doc)?)
    }

    /// Character behind a media-character link. Anime characters come with
    /// their voice actors.
    pub async fn character(&self, media: Media, media_character_id: u64) -> Result<CharacterModel> {
        let profile = media.profile();
        let path = match profile.character_include {
            Some(include) => {
                format!("media-characters/{media_character_id}/character?include={include}")
            }
            None => format!("media-characters/{media_character_id}/character"),
        };

        let doc = self.fetch(&path).await?;
        Ok(profile.decode_character(&doc)?)
    }

    /// Titles related to `id` (sequels, prequels, side stories, ...).
    pub async fn franchises(&self, media: Media, id: u64) -> Result<Vec<Franchise>> {
        let doc = self
            .fetch(&format!(
                "media-relationships?filter[source_id]={id}&filter[source_type]={}&include=destination&sort=role",
                media.source_type()
            ))
            .await?;
        Ok(Franchise::list_from_document(&doc)?)
    }

    pub async fn browse(
        &self,
        media: Media,
        sort: BrowseSort,
        options: &BrowseOptions,
    ) -> Result<SearchPage> {
        let filters = query::encode(media, &options.filters);
        let doc = self
            .fetch(&format!(
                "{media}?{filters}{}&sort={}",
                page_query(options.page, options.limit),
                sort.as_query()
            ))
            .await?;
        Ok(SearchPage::from_document(
            &doc,
            options.page.max(1),
            options.limit,
        )?)
    }

    pub async fn popularity(&self, media: Media, options: &BrowseOptions) -> Result<SearchPage> {
        self.browse(media, BrowseSort::Popularity, options).await
    }

    pub async fn top_rated(&self, media: Media, options: &BrowseOptions) -> Result<SearchPage> {
        self.browse(media, BrowseSort::TopRated, options).await
    }

    pub async fn upcoming(&self, media: Media, options: &BrowseOptions) -> Result<SearchPage> {
        self.browse(media, BrowseSort::Upcoming, options).await
    }

    pub async fn latest(&self, media: Media, options: &BrowseOptions) -> Result<SearchPage> {
        self.browse(media, BrowseSort::Latest, options).await
    }

    /// Free-text search.
    pub async fn search(
        &self,
        media: Media,
        text: &str,
        page: u32,
        limit: NonZeroU32,
    ) -> Result<SearchPage> {
        let doc = self
            .fetch(&format!(
                "{media}?filter[text]={}&{}",
                urlencoding::encode(text),
                page_query(page, limit)
            ))
            .await?;
        Ok(SearchPage::from_document(&doc, page.max(1), limit)?)
    }
}

fn json_api_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
    headers
}
