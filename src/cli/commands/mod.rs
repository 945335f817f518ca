mod browse;
mod character;
mod config;
mod franchises;
mod media;
mod search;

pub use browse::cmd_browse;
pub use character::cmd_character;
pub use config::{cmd_config_init, cmd_config_show};
pub use franchises::cmd_franchises;
pub use media::cmd_media;
pub use search::cmd_search;

use crate::models::{GeneralResult, SearchPage, ToJson};

fn print_json<T: ToJson>(value: &T) -> anyhow::Result<()> {
    println!("{}", value.to_json()?);
    Ok(())
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn print_result_line(result: &GeneralResult) {
    println!(
        "• {} (ID: {})",
        result.canonical_title.as_deref().unwrap_or("Untitled"),
        or_unknown(result.id)
    );
    println!(
        "  {} | {} | Rating: {} | Popularity #{}",
        result.subtype.as_deref().unwrap_or("?"),
        result.status.as_deref().unwrap_or("?"),
        result
            .average_rating
            .map_or_else(|| "?".to_string(), |r| format!("{r:.2}")),
        or_unknown(result.popularity_rank)
    );
}

fn print_page(page: &SearchPage) {
    if page.results.is_empty() {
        println!("No results.");
        return;
    }

    println!("{:-<60}", "");
    for result in &page.results {
        print_result_line(result);
    }
    println!("{:-<60}", "");
    println!(
        "Page {} of {} ({} results)",
        page.page, page.total_page, page.total_result
    );
}
