//! Integration tests using a mock HTTP server
//!
//! Exercises the public surface end-to-end: config → shared client →
//! orchestrated GETs across the single, discovery, batch and bulk paths.

use paged_rest::{ApiResponse, ClientConfig, Error, GetOptions, Params, RestApi};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

struct MockApi {
    config: ClientConfig,
    http: reqwest::Client,
}

impl MockApi {
    fn new(config: ClientConfig) -> Self {
        init_tracing();
        let http = config.build_http_client().expect("client build");
        Self { config, http }
    }

    fn json(server: &MockServer) -> Self {
        let config = ClientConfig::builder()
            .host(format!("{}/v1/", server.uri()))
            .header("Content-Type", "application/json")
            .no_page_marker()
            .build()
            .expect("config build");
        Self::new(config)
    }

    fn xml(server: &MockServer) -> Self {
        let config = ClientConfig::builder()
            .host(format!("{}/v1/", server.uri()))
            .header("Content-Type", "application/xml")
            .build()
            .expect("config build");
        Self::new(config)
    }
}

impl RestApi for MockApi {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

// ============================================================================
// Session headers
// ============================================================================

#[tokio::test]
async fn test_shared_client_carries_configured_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cities"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let api = MockApi::json(&server);
    let responses = api.get("cities", GetOptions::new()).await.unwrap();

    assert_eq!(responses.len(), 1);
    let body: serde_json::Value = serde_json::from_str(responses[0].text()).unwrap();
    assert!(body["results"].as_array().unwrap().is_empty());
}

// ============================================================================
// End-to-end dispatch paths
// ============================================================================

#[tokio::test]
async fn test_end_to_end_query_and_single_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cities"))
        .and(query_param("country", "BR"))
        .and(query_param("limit", "10000"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"meta": {"limit": 10000}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = MockApi::json(&server);
    let responses = api
        .get(
            "cities",
            GetOptions::new().params(
                Params::new()
                    .set("limit", 10000)
                    .set_all("country", ["BR", "BR"]),
            ),
        )
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(responses[0].text()).unwrap();
    assert_eq!(body["meta"]["limit"], 10000);
}

#[tokio::test]
async fn test_end_to_end_dissimilar_endpoint_batch_keeps_order() {
    let server = MockServer::start().await;

    // The first endpoint is slowest; output order must still match input.
    Mock::given(method("GET"))
        .and(path("/v1/cities"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("cities")
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_string("countries"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_string("sources"))
        .mount(&server)
        .await;

    let api = MockApi::json(&server);
    let responses = api
        .get(vec!["cities", "countries", "sources"], GetOptions::new())
        .await
        .unwrap();

    let bodies: Vec<&str> = responses.iter().map(ApiResponse::text).collect();
    assert_eq!(bodies, vec!["cities", "countries", "sources"]);
}

#[tokio::test]
async fn test_end_to_end_bulk_pagination_preserves_other_params() {
    let server = MockServer::start().await;

    for page in 1..=4 {
        Mock::given(method("GET"))
            .and(path("/v1/cities"))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", "50"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"meta": {"page": page}})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let api = MockApi::json(&server);
    let responses = api
        .get(
            "cities",
            GetOptions::new()
                .params(Params::new().set("limit", 50))
                .total_pages(4),
        )
        .await
        .unwrap();

    assert_eq!(responses.len(), 4);
    for (i, response) in responses.iter().enumerate() {
        let body: serde_json::Value = serde_json::from_str(response.text()).unwrap();
        assert_eq!(body["meta"]["page"], i as u64 + 1);
    }
}

#[tokio::test]
async fn test_end_to_end_discovery_chain() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/samples"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<samples><next-page>b7</next-page></samples>"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/samples"))
        .and(query_param("page", "b7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<samples/>"))
        .expect(1)
        .mount(&server)
        .await;

    let api = MockApi::xml(&server);
    let responses = api.get("samples", GetOptions::new()).await.unwrap();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[1].text(), "<samples/>");
}

// ============================================================================
// Failure surfacing
// ============================================================================

#[tokio::test]
async fn test_end_to_end_batch_failure_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cities"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/broken"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let api = MockApi::json(&server);
    let err = api
        .get(vec!["cities", "broken"], GetOptions::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, url } => {
            assert_eq!(status, 502);
            assert!(url.ends_with("/v1/broken"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_end_to_end_verbs_roundtrip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/samples"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/samples/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("updated"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/samples/9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = MockApi::json(&server);

    let created = api.post("samples", "<sample/>".to_string()).await.unwrap();
    assert_eq!(created.text(), "created");

    let updated = api.put("samples/9", "<sample/>".to_string()).await.unwrap();
    assert_eq!(updated.text(), "updated");

    let deleted = api.delete("samples/9").await.unwrap();
    assert_eq!(deleted.status.as_u16(), 204);
}
