use super::{or_unknown, print_json};
use crate::clients::KitsuClient;
use crate::domain::Media;
use crate::models::CharacterModel;

pub async fn cmd_character(
    client: &KitsuClient,
    media: Media,
    id: u64,
    json: bool,
) -> anyhow::Result<()> {
    let model = client.character(media, id).await?;

    if json {
        return print_json(&model);
    }

    let character = model.character();
    println!(
        "{}",
        character
            .canonical_name
            .as_deref()
            .or(character.name.as_deref())
            .unwrap_or("Unknown character")
    );
    println!("{:-<60}", "");
    println!("ID:     {}", or_unknown(character.id));
    println!("MAL ID: {}", or_unknown(character.mal_id));
    if let Some(other) = character.other_names.as_ref().filter(|n| !n.is_empty()) {
        println!("AKA:    {}", other.join(", "));
    }

    if let CharacterModel::Anime(anime) = &model {
        if anime.voice_actors.is_empty() {
            println!("No voice actors listed.");
        } else {
            println!("Voice actors:");
            for (locale, actor) in &anime.voice_actors {
                println!("  {locale}: {}", actor.name.as_deref().unwrap_or("?"));
            }
        }
    }

    println!();
    Ok(())
}
