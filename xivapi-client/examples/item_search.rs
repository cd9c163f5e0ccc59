//! Structured item search with a level filter and sorted results
//!
//! Usage: `XIVAPI_KEY=... cargo run --example item_search -- "Tincture"`

use xivapi_client::{Filter, SearchQuery, Sort, XivApiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("XIVAPI_KEY")?;
    let name = std::env::args().nth(1).unwrap_or_else(|| "Tincture".to_string());

    let client = XivApiClient::new(api_key)?;

    let query = SearchQuery::new(&name)
        .indexes(["Item"])
        .columns(["ID", "Name", "LevelItem", "Icon"])
        .filter(Filter::new("LevelItem", "gte", 100)?)
        .sort(Sort::descending("LevelItem"))
        .per_page(25);

    let results = client.index_search(&query).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
