use super::{print_json, print_page};
use crate::cli::PageArgs;
use crate::clients::KitsuClient;
use crate::config::Config;
use crate::domain::Media;

pub async fn cmd_search(
    client: &KitsuClient,
    config: &Config,
    media: Media,
    query: &str,
    page: &PageArgs,
    json: bool,
) -> anyhow::Result<()> {
    let limit = page.limit.unwrap_or_else(|| config.browse.limit());
    let results = client.search(media, query, page.page, limit).await?;

    if json {
        return print_json(&results);
    }

    println!("Searching {media} for: {query}");
    print_page(&results);
    Ok(())
}
