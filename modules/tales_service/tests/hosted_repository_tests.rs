//! HTTP-level tests for the hosted repository and the contact relay

mod common;

use common::{contact, print_test_header};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use tales_service::config::HostedConfig;
use tales_service::contract::TaleQuery;
use tales_service::domain::{ContactRelay, ReachabilityProbe, TaleRepository};
use tales_service::infra::relay::FormRelayClient;
use tales_service::infra::storage::HostedTaleRepository;

fn repo(server: &MockServer, api_key: &str) -> HostedTaleRepository {
    HostedTaleRepository::new(&HostedConfig {
        url: server.base_url(),
        api_key: api_key.to_string(),
        timeout: Duration::from_secs(5),
        ..HostedConfig::default()
    })
    .unwrap()
}

fn rows() -> serde_json::Value {
    json!([
        { "id": 4, "title": "The Crane Wife", "text": "A crane...", "nation": "Japan", "source": "Tsuru no Ongaeshi" },
        { "id": 6, "title": "The Fox and the Crab", "text": "A fox...", "nation": "Japan", "source": null }
    ])
}

#[tokio::test]
async fn test_find_sends_filters_and_auth() {
    print_test_header(
        "test_find_sends_filters_and_auth",
        &["Filtered select carries ilike/eq filters, order, limit and the API key"],
    );
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/tales")
                .query_param("select", "*")
                .query_param("order", "id.asc")
                .query_param("limit", "12")
                .query_param("title", "ilike.%crane%")
                .query_param("nation", "eq.Japan")
                .header("apikey", "anon-key")
                .header("authorization", "Bearer anon-key")
                .header("accept", "application/json");
            then.status(200).json_body(rows());
        })
        .await;

    let query = TaleQuery::new(12)
        .with_search(Some("crane"))
        .with_nation(Some("Japan"));
    let tales = repo(&server, "anon-key").find(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(tales.len(), 2);
    assert_eq!(tales[0].title, "The Crane Wife");
    // null source maps to empty text
    assert_eq!(tales[1].source, "");
}

#[tokio::test]
async fn test_like_metacharacters_are_escaped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/tales")
                .query_param("title", "ilike.%50\\%_off%");
            then.status(200).json_body(json!([]));
        })
        .await;

    let query = TaleQuery::new(6).with_search(Some("50%_off"));
    let tales = repo(&server, "").find(&query).await.unwrap();

    mock.assert_async().await;
    assert!(tales.is_empty());
}

#[tokio::test]
async fn test_find_by_id_and_nations() {
    let server = MockServer::start_async().await;
    let by_id = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/tales")
                .query_param("id", "eq.4")
                .query_param("limit", "1");
            then.status(200).json_body(json!([rows()[0].clone()]));
        })
        .await;
    let nations = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/tales")
                .query_param("select", "nation");
            then.status(200).json_body(json!([
                { "nation": "Japan" }, { "nation": "Ghana" }, { "nation": null }, { "nation": "Japan" }
            ]));
        })
        .await;

    let repo = repo(&server, "k");
    assert_eq!(repo.find_by_id(4).await.unwrap().unwrap().id, 4);
    assert_eq!(repo.list_nations().await.unwrap(), vec!["Japan", "Ghana"]);

    by_id.assert_async().await;
    nations.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/tales");
            then.status(401).json_body(json!({ "message": "Invalid API key" }));
        })
        .await;

    let err = repo(&server, "bad").find(&TaleQuery::new(6)).await.unwrap_err();
    assert!(format!("{err:#}").contains("rejected"));
}

#[tokio::test]
async fn test_ping_reflects_reachability() {
    let server = MockServer::start_async().await;
    let ok = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/tales")
                .query_param("select", "id")
                .query_param("limit", "1");
            then.status(200).json_body(json!([{ "id": 1 }]));
        })
        .await;

    repo(&server, "").ping().await.unwrap();
    ok.assert_async().await;

    let unreachable = HostedTaleRepository::new(&HostedConfig {
        url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_millis(500),
        ..HostedConfig::default()
    })
    .unwrap();
    assert!(unreachable.ping().await.is_err());
}

#[tokio::test]
async fn test_form_relay_posts_urlencoded_message() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/f/contact")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("name=Ada&email=ada%40example.org&message=Hi+there");
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    let relay = FormRelayClient::new(&server.url("/f/contact"), Duration::from_secs(5)).unwrap();
    relay
        .submit(&contact("Ada", "ada@example.org", "Hi there"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_form_relay_error_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/f/contact");
            then.status(500);
        })
        .await;

    let relay = FormRelayClient::new(&server.url("/f/contact"), Duration::from_secs(5)).unwrap();
    assert!(relay
        .submit(&contact("Ada", "ada@example.org", "Hi"))
        .await
        .is_err());
}
