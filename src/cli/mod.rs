//! CLI module - Command-line interface for the Kitsu client
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use crate::clients::BrowseSort;
use crate::domain::{AgeRating, FilterKind, FilterValue, Genre, Media, Season};
use crate::query::Filters;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::num::NonZeroU32;

/// kitsu - Anime and manga catalog lookups against the Kitsu API
#[derive(Parser)]
#[command(name = "kitsu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the JSON projection instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show an anime with its genres, characters and production companies
    #[command(alias = "a")]
    Anime {
        /// Kitsu anime ID
        id: u64,
    },

    /// Show a manga with its genres and characters
    #[command(alias = "m")]
    Manga {
        /// Kitsu manga ID
        id: u64,
    },

    /// Show the character behind a media-character link
    #[command(alias = "c")]
    Character {
        /// anime or manga
        media: Media,
        /// Media-character ID (from an anime/manga character list)
        id: u64,
    },

    /// List titles related to an anime or manga
    #[command(alias = "f")]
    Franchises {
        /// anime or manga
        media: Media,
        /// Source title ID
        id: u64,
    },

    /// Browse the catalog by popularity, rating or date
    #[command(alias = "b")]
    Browse {
        /// anime or manga
        media: Media,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Popularity)]
        sort: SortArg,

        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Free-text search
    #[command(alias = "s")]
    Search {
        /// anime or manga
        media: Media,

        /// Search query
        #[arg(required = true)]
        query: Vec<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Create ./config.toml with default values
    Init,
    /// Print the effective configuration
    Show,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Popularity,
    TopRated,
    Upcoming,
    Latest,
}

impl From<SortArg> for BrowseSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Popularity => Self::Popularity,
            SortArg::TopRated => Self::TopRated,
            SortArg::Upcoming => Self::Upcoming,
            SortArg::Latest => Self::Latest,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Results per page (defaults to browse.default_limit)
    #[arg(long)]
    pub limit: Option<NonZeroU32>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Age rating (G, PG, R, R18); anime only
    #[arg(long = "age-rating")]
    pub age_rating: Vec<AgeRating>,

    /// Average rating bound, 5-100; repeat for a range
    #[arg(long)]
    pub rating: Vec<i64>,

    /// Genre slug or name, e.g. slice-of-life
    #[arg(long)]
    pub genre: Vec<Genre>,

    /// Season (spring, summer, fall, winter); anime only
    #[arg(long)]
    pub season: Vec<Season>,

    /// Subtype, e.g. tv, movie, manga, novel
    #[arg(long, value_parser = FilterValue::parse_subtype)]
    pub subtype: Vec<FilterValue>,

    /// Year bound, 1868-2030; repeat for a range
    #[arg(long)]
    pub year: Vec<i64>,
}

impl FilterArgs {
    #[must_use]
    pub fn to_filters(&self) -> Filters {
        Filters::new()
            .with(FilterKind::AgeRating, self.age_rating.iter().copied())
            .with(FilterKind::AverageRating, self.rating.iter().copied())
            .with(FilterKind::Genres, self.genre.iter().copied())
            .with(FilterKind::Season, self.season.iter().copied())
            .with(FilterKind::Subtype, self.subtype.iter().copied())
            .with(FilterKind::Year, self.year.iter().copied())
    }
}

pub use commands::*;
