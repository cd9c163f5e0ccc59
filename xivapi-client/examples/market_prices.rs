//! Market board listings for an item across several worlds
//!
//! Usage: `XIVAPI_KEY=... cargo run --example market_prices -- <item_id>`

use xivapi_client::XivApiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("XIVAPI_KEY")?;
    let item_id: u64 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "5".to_string())
        .parse()?;

    let client = XivApiClient::new(api_key)?;

    let by_worlds = client
        .market_by_worlds(item_id, &["Phoenix", "Gilgamesh", "Tonberry"], 25)
        .await?;
    println!("{}", serde_json::to_string_pretty(&by_worlds)?);

    let by_datacenter = client.market_by_datacenter(item_id, "Chaos", 25).await?;
    println!("{}", serde_json::to_string_pretty(&by_datacenter)?);

    Ok(())
}
