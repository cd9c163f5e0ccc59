//! Asynchronous typed client for [XIVAPI](https://xivapi.com), the Final
//! Fantasy XIV game-data service
//!
//! The crate covers the Lodestone profile endpoints (characters, Free
//! Companies, linkshells, PvP teams), structured search over game-content
//! indexes, lore full-text search, world status, and market board data.
//! Responses are returned as raw `serde_json::Value` bodies; no schema is
//! imposed on the upstream payloads.
//!
//! Input problems (unknown language code, empty index list, out-of-range
//! world list, ...) fail before any request is issued. Remote failures map
//! onto a closed [`Error`] taxonomy by HTTP status code.
//!
//! # Example
//!
//! ```no_run
//! use xivapi_client::{SearchQuery, XivApiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = XivApiClient::new("my_api_key")?;
//!
//! // Look up a character on the Lodestone
//! let results = client.character_search("Phoenix", "Lava", "Char", 1).await?;
//! println!("{results}");
//!
//! // Structured search across content indexes
//! let query = SearchQuery::new("Grade 4 Tincture of Strength")
//!     .indexes(["Item"])
//!     .columns(["ID", "Name", "Icon"]);
//! let items = client.index_search(&query).await?;
//! println!("{items}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod language;
mod options;
mod search;

pub use client::XivApiClient;
pub use error::{Error, Result};
pub use language::Language;
pub use options::{CharacterOptions, FreeCompanyOptions};
pub use search::{Comparison, Filter, SearchQuery, Sort, StringAlgo};
