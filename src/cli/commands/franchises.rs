use super::{print_json, print_result_line};
use crate::clients::KitsuClient;
use crate::domain::Media;

pub async fn cmd_franchises(
    client: &KitsuClient,
    media: Media,
    id: u64,
    json: bool,
) -> anyhow::Result<()> {
    let franchises = client.franchises(media, id).await?;

    if json {
        return print_json(&franchises);
    }

    if franchises.is_empty() {
        println!("No related titles for {media} {id}");
        return Ok(());
    }

    println!("Related titles:");
    println!("{:-<60}", "");
    for franchise in &franchises {
        println!("[{}]", franchise.role.as_deref().unwrap_or("related"));
        print_result_line(&franchise.result);
    }
    println!();
    Ok(())
}
