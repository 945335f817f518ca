pub mod kitsu;

pub use kitsu::{BrowseOptions, BrowseSort, KitsuClient};
