use super::{print_json, print_page};
use crate::cli::{FilterArgs, PageArgs, SortArg};
use crate::clients::{BrowseOptions, KitsuClient};
use crate::config::Config;
use crate::domain::Media;
use crate::query;
use tracing::warn;

pub async fn cmd_browse(
    client: &KitsuClient,
    config: &Config,
    media: Media,
    sort: SortArg,
    page: &PageArgs,
    filters: &FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    let filters = filters.to_filters();

    for rejected in query::encode_with_report(media, &filters).rejected {
        warn!("Ignoring filter: {}", rejected);
    }

    let options = BrowseOptions::default()
        .page(page.page)
        .limit(page.limit.unwrap_or_else(|| config.browse.limit()))
        .filters(filters);

    let results = client.browse(media, sort.into(), &options).await?;

    if json {
        return print_json(&results);
    }

    print_page(&results);
    Ok(())
}
