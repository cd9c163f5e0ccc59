//! Look up a character by Lodestone ID with extra data blocks
//!
//! Usage: `XIVAPI_KEY=... cargo run --example character_lookup -- <lodestone_id>`

use xivapi_client::{CharacterOptions, XivApiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("XIVAPI_KEY")?;
    let lodestone_id: u64 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "730968".to_string())
        .parse()?;

    let client = XivApiClient::new(api_key)?;

    let options = CharacterOptions::default()
        .with_achievements()
        .with_minions_mounts()
        .with_free_company();
    let character = client.character_by_id(lodestone_id, &options).await?;

    println!("{}", serde_json::to_string_pretty(&character)?);
    Ok(())
}
