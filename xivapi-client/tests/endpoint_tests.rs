//! Request construction tests: URL paths, query parameters, and search bodies

use serde_json::json;
use wiremock::matchers::{
    body_partial_json, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xivapi_client::{
    CharacterOptions, Filter, FreeCompanyOptions, Language, SearchQuery, Sort, StringAlgo,
    XivApiClient,
};

fn client_against(server: &MockServer) -> XivApiClient {
    XivApiClient::with_client(reqwest::Client::new(), "test_key").with_base_url(server.uri())
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({}))
}

#[tokio::test]
async fn test_private_key_on_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lodestone/worldstatus"))
        .and(query_param("private_key", "test_key"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client_against(&server).lodestone_worldstatus().await.unwrap();
}

#[tokio::test]
async fn test_character_search_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/search"))
        .and(query_param("name", "Lava Char"))
        .and(query_param("server", "Phoenix"))
        .and(query_param("page", "1"))
        .and(query_param("private_key", "test_key"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client_against(&server)
        .character_search("Phoenix", "Lava", "Char", 1)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_character_by_id_include_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/123"))
        .and(query_param("data", "AC,MIMO"))
        .and(query_param("extended", "1"))
        .and(query_param("language", "de"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let options = CharacterOptions::default()
        .with_achievements()
        .with_minions_mounts()
        .extended()
        .with_language(Language::De);
    client_against(&server)
        .character_by_id(123, &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_character_by_id_omits_data_without_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/123"))
        .and(query_param("language", "en"))
        .and(query_param_is_missing("data"))
        .and(query_param_is_missing("extended"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client_against(&server)
        .character_by_id(123, &CharacterOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_freecompany_by_id_members() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/freecompany/9231394073691073564"))
        .and(query_param("data", "FCM"))
        .and(query_param_is_missing("extended"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let options = FreeCompanyOptions::default().with_members();
    client_against(&server)
        .freecompany_by_id(9231394073691073564, &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_linkshell_and_pvpteam_lookups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/linkshell/42"))
        .and(query_param("private_key", "test_key"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pvpteam/17"))
        .and(query_param("private_key", "test_key"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server);
    client.linkshell_by_id(42).await.unwrap();
    client.pvpteam_by_id(17).await.unwrap();
}

#[tokio::test]
async fn test_index_search_body_and_passthrough() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(query_param("language", "en"))
        .and(query_param("private_key", "test_key"))
        .and(body_partial_json(json!({
            "indexes": "Spell",
            "columns": "ID,Name",
            "body": {
                "from": 0,
                "size": 10,
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new("Fire")
        .indexes(["Spell"])
        .columns(["ID", "Name"]);
    let body = client_against(&server).index_search(&query).await.unwrap();
    assert_eq!(body, json!({"Results": []}));
}

#[tokio::test]
async fn test_index_search_deduplicates_indexes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({"indexes": "Item,Recipe"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new("Copper Ingot")
        .indexes(["Item", "Item", "Recipe"])
        .columns(["ID"]);
    client_against(&server).index_search(&query).await.unwrap();
}

#[tokio::test]
async fn test_index_search_filters_sort_and_algo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({
            "body": {
                "query": {
                    "bool": {
                        "filter": [
                            { "range": { "LevelItem": { "gte": 100 } } }
                        ]
                    }
                },
                "sort": [ { "LevelItem": "desc" } ]
            }
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new("Tincture")
        .indexes(["Item"])
        .columns(["ID"])
        .filter(Filter::new("LevelItem", "gte", 100).unwrap())
        .sort(Sort::descending("LevelItem"))
        .string_algo(StringAlgo::Fuzzy);
    client_against(&server).index_search(&query).await.unwrap();
}

#[tokio::test]
async fn test_index_by_id_columns_deduplicated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Item/1675"))
        .and(query_param("columns", "ID,Name"))
        .and(query_param("language", "ja"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client_against(&server)
        .index_by_id("Item", 1675, &["Name", "ID", "Name"], Language::Ja)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_lore_search_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lore"))
        .and(query_param("string", "Oblivion"))
        .and(query_param("language", "fr"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client_against(&server)
        .lore_search("Oblivion", Language::Fr)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_market_by_worlds_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/market/item/5"))
        .and(query_param("servers", "Gilgamesh,Phoenix"))
        .and(query_param("max_history", "25"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client_against(&server)
        .market_by_worlds(5, &["Phoenix", "Gilgamesh", "Phoenix"], 25)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_market_by_datacenter_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/market/item/5"))
        .and(query_param("dc", "Chaos"))
        .and(query_param("max_history", "10"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client_against(&server)
        .market_by_datacenter(5, "Chaos", 10)
        .await
        .unwrap();
}
