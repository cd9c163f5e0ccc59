//! Asynchronous client for XIVAPI's endpoints

use crate::{
    CharacterOptions, Error, FreeCompanyOptions, Language, Result, SearchQuery,
    search::join_unique,
};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Public XIVAPI host
const DEFAULT_BASE_URL: &str = "https://xivapi.com";

/// Default request timeout for clients built by [`XivApiClient::new`]
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of worlds accepted by a market query
const MAX_MARKET_WORLDS: usize = 15;

/// Asynchronous client for XIVAPI's character, Free Company, linkshell,
/// PvP-team, market and game-content endpoints
///
/// The client owns its `reqwest::Client` for its whole lifetime; cloning is
/// cheap and clones share the same connection pool, so a single value can
/// serve concurrent calls. The API key is sent as the `private_key` query
/// parameter on every request.
///
/// # Example
///
/// ```no_run
/// use xivapi_client::XivApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = XivApiClient::new("my_api_key")?;
/// let status = client.lodestone_worldstatus().await?;
/// println!("{status}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct XivApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl XivApiClient {
    /// Create a client with its own HTTP connection pool and a 30 second
    /// request timeout
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self::with_client(client, api_key))
    }

    /// Create a client around an existing `reqwest::Client`
    ///
    /// Use this to share a connection pool with the rest of the application
    /// or to control timeouts and TLS settings.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL, e.g. to point at a mock server in tests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for characters on the Lodestone
    #[instrument(skip(self))]
    pub async fn character_search(
        &self,
        world: &str,
        forename: &str,
        surname: &str,
        page: u32,
    ) -> Result<Value> {
        let params = [
            ("name", format!("{forename} {surname}")),
            ("server", world.to_string()),
            ("page", page.to_string()),
        ];
        self.get("/character/search", &params).await
    }

    /// Look up a character by Lodestone ID
    #[instrument(skip(self, options))]
    pub async fn character_by_id(
        &self,
        lodestone_id: u64,
        options: &CharacterOptions,
    ) -> Result<Value> {
        let mut params = vec![("language", options.language.as_str().to_string())];
        if options.extended {
            params.push(("extended", "1".to_string()));
        }
        if let Some(data) = options.data_param() {
            params.push(("data", data));
        }
        self.get(&format!("/character/{lodestone_id}"), &params).await
    }

    /// Search for Free Companies on the Lodestone
    #[instrument(skip(self))]
    pub async fn freecompany_search(&self, world: &str, name: &str, page: u32) -> Result<Value> {
        self.lodestone_search("/freecompany/search", world, name, page)
            .await
    }

    /// Look up a Free Company by Lodestone ID
    #[instrument(skip(self, options))]
    pub async fn freecompany_by_id(
        &self,
        lodestone_id: u64,
        options: &FreeCompanyOptions,
    ) -> Result<Value> {
        let mut params = vec![("language", options.language.as_str().to_string())];
        if options.extended {
            params.push(("extended", "1".to_string()));
        }
        if let Some(data) = options.data_param() {
            params.push(("data", data));
        }
        self.get(&format!("/freecompany/{lodestone_id}"), &params)
            .await
    }

    /// Search for linkshells on the Lodestone
    #[instrument(skip(self))]
    pub async fn linkshell_search(&self, world: &str, name: &str, page: u32) -> Result<Value> {
        self.lodestone_search("/linkshell/search", world, name, page)
            .await
    }

    /// Look up a linkshell by Lodestone ID
    #[instrument(skip(self))]
    pub async fn linkshell_by_id(&self, lodestone_id: u64) -> Result<Value> {
        self.get(&format!("/linkshell/{lodestone_id}"), &[]).await
    }

    /// Search for PvP teams on the Lodestone
    #[instrument(skip(self))]
    pub async fn pvpteam_search(&self, world: &str, name: &str, page: u32) -> Result<Value> {
        self.lodestone_search("/pvpteam/search", world, name, page)
            .await
    }

    /// Look up a PvP team by Lodestone ID
    #[instrument(skip(self))]
    pub async fn pvpteam_by_id(&self, lodestone_id: u64) -> Result<Value> {
        self.get(&format!("/pvpteam/{lodestone_id}"), &[]).await
    }

    /// Run a structured search against one or more content indexes
    ///
    /// Validates the query locally, then issues `POST /search` with the
    /// structured body built by [`SearchQuery::body`].
    #[instrument(skip(self, query))]
    pub async fn index_search(&self, query: &SearchQuery) -> Result<Value> {
        query.validate()?;
        let params = [("language", query.language.as_str().to_string())];
        self.post("/search", &params, &query.body()).await
    }

    /// Fetch a row from a content index by ID, e.g. `Item` 1675
    #[instrument(skip(self))]
    pub async fn index_by_id(
        &self,
        index: &str,
        content_id: u64,
        columns: &[&str],
        language: Language,
    ) -> Result<Value> {
        if index.is_empty() {
            return Err(Error::invalid_index(
                "specify an index to look up, e.g. \"Item\"",
            ));
        }
        if columns.is_empty() {
            return Err(Error::invalid_columns(
                "specify at least one column to return",
            ));
        }

        let params = [
            ("language", language.as_str().to_string()),
            ("columns", join_unique(columns)),
        ];
        self.get(&format!("/{index}/{content_id}"), &params).await
    }

    /// Full-text search over quest dialogue, item descriptions, cutscene
    /// subtitles and other game text
    #[instrument(skip(self))]
    pub async fn lore_search(&self, query: &str, language: Language) -> Result<Value> {
        let params = [
            ("language", language.as_str().to_string()),
            ("string", query.to_string()),
        ];
        self.get("/lore", &params).await
    }

    /// Fetch the Lodestone world status post
    #[instrument(skip(self))]
    pub async fn lodestone_worldstatus(&self) -> Result<Value> {
        self.get("/lodestone/worldstatus", &[]).await
    }

    /// Current sale listings and sale history for an item on up to 15 worlds
    #[instrument(skip(self))]
    pub async fn market_by_worlds(
        &self,
        item_id: u64,
        worlds: &[&str],
        max_history: u32,
    ) -> Result<Value> {
        if worlds.is_empty() || worlds.len() > MAX_MARKET_WORLDS {
            return Err(Error::InvalidWorlds {
                count: worlds.len(),
            });
        }

        let params = [
            ("servers", join_unique(worlds)),
            ("max_history", max_history.to_string()),
        ];
        self.get(&format!("/market/item/{item_id}"), &params).await
    }

    /// Current sale listings and sale history for an item on every world of
    /// a datacenter
    #[instrument(skip(self))]
    pub async fn market_by_datacenter(
        &self,
        item_id: u64,
        datacenter: &str,
        max_history: u32,
    ) -> Result<Value> {
        if datacenter.is_empty() {
            return Err(Error::InvalidDatacenter);
        }

        let params = [
            ("dc", datacenter.to_string()),
            ("max_history", max_history.to_string()),
        ];
        self.get(&format!("/market/item/{item_id}"), &params).await
    }

    /// Shared name/server/page query for the Lodestone search endpoints
    async fn lodestone_search(
        &self,
        path: &str,
        world: &str,
        name: &str,
        page: u32,
    ) -> Result<Value> {
        let params = [
            ("name", name.to_string()),
            ("server", world.to_string()),
            ("page", page.to_string()),
        ];
        self.get(path, &params).await
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("private_key", self.api_key.as_str())])
            .query(params);
        self.execute(request).await
    }

    async fn post(&self, path: &str, params: &[(&str, String)], body: &Value) -> Result<Value> {
        let request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .query(&[("private_key", self.api_key.as_str())])
            .query(params)
            .json(body);
        self.execute(request).await
    }

    /// Dispatch a request, timing the round trip, and map the response
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let started = Instant::now();
        debug!("dispatching XIVAPI request");
        let response = request.send().await?;
        map_response(response, started.elapsed()).await
    }
}

/// Map a completed response to a parsed body or a typed error
///
/// Pure in the status code: 200 yields the JSON body, the documented error
/// statuses yield their variants, and anything else is surfaced as
/// [`Error::UnexpectedStatus`] rather than silently ignored.
async fn map_response(response: Response, elapsed: Duration) -> Result<Value> {
    let status = response.status();
    let url = response.url().clone();
    info!(
        status = status.as_u16(),
        url = %url,
        elapsed_ms = elapsed.as_millis() as u64,
        "XIVAPI response"
    );

    match status.as_u16() {
        200 => Ok(response.json().await?),
        400 => Err(Error::BadRequest),
        401 => Err(Error::Forbidden),
        404 => Err(Error::NotFound),
        500 => Err(Error::ServerError),
        503 => Err(Error::ServiceUnavailable),
        code => Err(Error::unexpected_status(code, url.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> XivApiClient {
        XivApiClient::with_client(Client::new(), "test_key")
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(client().base_url(), "https://xivapi.com");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = client().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_index_by_id_rejects_empty_index() {
        let err = client()
            .index_by_id("", 1675, &["ID"], Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { .. }));
    }

    #[tokio::test]
    async fn test_index_by_id_rejects_empty_columns() {
        let err = client()
            .index_by_id("Item", 1675, &[], Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColumns { .. }));
    }

    #[tokio::test]
    async fn test_market_by_worlds_rejects_bad_counts() {
        let err = client().market_by_worlds(5, &[], 25).await.unwrap_err();
        assert!(matches!(err, Error::InvalidWorlds { count: 0 }));

        let worlds = vec!["Phoenix"; 16];
        let err = client().market_by_worlds(5, &worlds, 25).await.unwrap_err();
        assert!(matches!(err, Error::InvalidWorlds { count: 16 }));
    }

    #[tokio::test]
    async fn test_market_by_datacenter_rejects_empty_name() {
        let err = client().market_by_datacenter(5, "", 25).await.unwrap_err();
        assert!(matches!(err, Error::InvalidDatacenter));
    }
}
