#![allow(clippy::unwrap_used, reason = "tests fail loudly on unexpected errors")]
// Integration tests for `BlueCatClient` over HTTP using wiremock.

use std::net::TcpListener;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bluecat_client::{BlueCatClient, BlueCatError, ClientConfig, Entity, Options, Scheme};

const API: &str = "/Services/REST/v1";
const TOKEN: &str = "BAMAuthToken: abc123==";

// ── Helpers ─────────────────────────────────────────────────────────

fn config() -> ClientConfig {
    ClientConfig::default()
        .with_scheme(Scheme::Http)
        .with_timeout_secs(5)
}

fn api_path(endpoint: &str) -> String {
    format!("{API}/{endpoint}")
}

async fn setup() -> (MockServer, BlueCatClient) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("login")))
        .and(query_param("username", "admin"))
        .and(query_param("password", "p@ss word"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "\"Session Token-> {TOKEN} <- for User : admin\""
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = BlueCatClient::login_with_config(
        &config(),
        &server.address().to_string(),
        "admin",
        "p@ss word",
    )
    .await
    .unwrap();
    (server, client)
}

// ── Session tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_login_extracts_token() {
    let (_server, client) = setup().await;
    assert_eq!(client.session().token(), TOKEN);
}

#[tokio::test]
async fn test_login_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("login")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("\"Authentication Error: Invalid username or password\""),
        )
        .mount(&server)
        .await;

    let result =
        BlueCatClient::login_with_config(&config(), &server.address().to_string(), "admin", "nope")
            .await;

    assert!(
        matches!(result, Err(BlueCatError::Authentication(_))),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result =
        BlueCatClient::login_with_config(&config(), &format!("127.0.0.1:{port}"), "admin", "x")
            .await;

    match result {
        Err(BlueCatError::Transport { operation, .. }) => assert_eq!(operation, "login"),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}

// ── Operation tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_get_entity_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("getEntityById")))
        .and(query_param("id", "5"))
        .and(header("Authorization", TOKEN))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id":5,"name":"net1","type":"IP4Network","properties":"CIDR=10.0.0.0/24"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let entity = client.get_entity_by_id(5).await.unwrap();
    assert_eq!(
        entity,
        Entity {
            id: 5,
            name: "net1".into(),
            object_type: "IP4Network".into(),
            properties: "CIDR=10.0.0.0/24".into(),
        }
    );
}

#[tokio::test]
async fn test_paged_listing_sends_count_and_start() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("getEntities")))
        .and(query_param("parentId", "100"))
        .and(query_param("type", "IP4Block"))
        .and(query_param("count", "10"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let blocks = client.get_entities(100, "IP4Block", 10, 0).await.unwrap();
    assert!(blocks.is_empty());
}

#[tokio::test]
async fn test_scalar_response_is_unquoted() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("getNextAvailableIP4Address")))
        .and(query_param("parentId", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"10.0.0.6\""))
        .mount(&server)
        .await;

    let address = client.get_next_available_ip4_address(5).await.unwrap();
    assert_eq!(address, "10.0.0.6");
}

#[tokio::test]
async fn test_add_generic_record_returns_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("addGenericRecord")))
        .and(query_param("absoluteName", "www.example.com"))
        .and(query_param("rdata", "10.0.0.5"))
        .and(query_param("type", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_string("12345"))
        .expect(1)
        .mount(&server)
        .await;

    let id = client
        .add_generic_record("www.example.com", "10.0.0.5", 3600, "A", 200, &Options::new())
        .await
        .unwrap();
    assert_eq!(id, 12345);
}

#[tokio::test]
async fn test_rejected_mutation() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("addGenericRecord")))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("\"Invalid rdata for record type A\""),
        )
        .mount(&server)
        .await;

    let result = client
        .add_generic_record("www.example.com", "bogus", 3600, "A", 200, &Options::new())
        .await;

    match result {
        Err(BlueCatError::Rejected { operation, message }) => {
            assert_eq!(operation, "addGenericRecord");
            assert_eq!(message, "Invalid rdata for record type A");
        }
        other => panic!("expected Rejected error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_sends_entity_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(api_path("update")))
        .and(body_json(serde_json::json!({
            "id": 5,
            "name": "net1-renamed",
            "type": "IP4Network",
            "properties": "CIDR=10.0.0.0/24|"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let entity = Entity {
        id: 5,
        name: "net1-renamed".into(),
        object_type: "IP4Network".into(),
        properties: "CIDR=10.0.0.0/24|".into(),
    };
    client.update(&entity).await.unwrap();
}

#[tokio::test]
async fn test_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("getEntityById")))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("Object with id 99 was not found"),
        )
        .mount(&server)
        .await;

    let result = client.get_entity_by_id(99).await;
    assert!(
        matches!(result, Err(BlueCatError::Api { status: 500, .. })),
        "expected Api error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_garbled_json_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("getEntities")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.get_entities(1, "IP4Block", 10, 0).await.unwrap_err();
    assert_eq!(err.operation(), Some("getEntities"));
    assert!(matches!(err, BlueCatError::Decode { .. }));
}
