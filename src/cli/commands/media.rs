use super::{or_unknown, print_json};
use crate::clients::KitsuClient;
use crate::domain::Media;
use crate::models::MediaModel;

pub async fn cmd_media(
    client: &KitsuClient,
    media: Media,
    id: u64,
    json: bool,
) -> anyhow::Result<()> {
    let model = client.media(media, id).await?;

    if json {
        return print_json(&model);
    }

    let base = model.base();
    println!("{} Info", media.source_type());
    println!("{:-<60}", "");
    println!(
        "Title:      {}",
        base.canonical_title.as_deref().unwrap_or("Untitled")
    );
    if let Some(titles) = &base.titles {
        for (locale, title) in titles {
            println!("  {locale}: {title}");
        }
    }
    println!("ID:         {}", or_unknown(base.id));
    println!("Subtype:    {}", base.subtype.as_deref().unwrap_or("?"));
    println!("Status:     {}", base.status.as_deref().unwrap_or("?"));
    println!(
        "Rating:     {}",
        base.average_rating
            .map_or_else(|| "?".to_string(), |r| format!("{r:.2}"))
    );
    println!(
        "Aired:      {} - {}",
        or_unknown(base.start_date.map(|d| d.date_naive())),
        or_unknown(base.end_date.map(|d| d.date_naive()))
    );
    if !base.genres.is_empty() {
        println!("Genres:     {}", base.genres.join(", "));
    }

    match &model {
        MediaModel::Anime(anime) => {
            println!(
                "Episodes:   {} x {} min",
                or_unknown(anime.episode_count),
                or_unknown(anime.episode_length)
            );
            if !anime.studios.is_empty() {
                println!("Studios:    {}", anime.studios.join(", "));
            }
            if !anime.producers.is_empty() {
                println!("Producers:  {}", anime.producers.join(", "));
            }
            if !anime.licensors.is_empty() {
                println!("Licensors:  {}", anime.licensors.join(", "));
            }
        }
        MediaModel::Manga(manga) => {
            println!(
                "Volumes:    {} ({} chapters)",
                or_unknown(manga.volume_count),
                or_unknown(manga.chapter_count)
            );
            if let Some(serialization) = &manga.serialization {
                println!("Serialized: {serialization}");
            }
        }
    }

    println!(
        "Characters: {} main, {} supporting",
        base.main_characters.len(),
        base.supporting_characters.len()
    );
    println!();
    Ok(())
}
