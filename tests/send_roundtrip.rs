//! Integration tests for single-builder send
//!
//! These tests run the full materialize -> send -> accessor pipeline against
//! a local mock server, including:
//! - JSON/XML bodies echoed back and decoded
//! - Query strings and negotiated headers on the wire
//! - Builder reuse after a failed send
//! - Persisting the buffered body to disk

mod helpers;

use std::collections::HashMap;

use fluent_http::{BuilderState, ErrorKind, HttpClient, HttpClientError};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use helpers::{closed_port_url, echo, fixture_ca_path, start_server};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Order {
    id: u64,
    customer: String,
    items: Vec<String>,
    express: bool,
}

fn sample_order() -> Order {
    Order {
        id: 42,
        customer: "Ada Lovelace".to_string(),
        items: vec!["gear".to_string(), "cog".to_string()],
        express: true,
    }
}

#[tokio::test]
async fn test_json_round_trip_through_echo() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(header("content-type", "application/json"))
        .respond_with(echo)
        .mount(&server)
        .await;

    let order = sample_order();
    let mut client = HttpClient::post(format!("{}/echo", server.uri()));
    client.set_json_body(&order).send().await;
    assert!(client.error().is_none(), "send failed: {:?}", client.error());

    let mut decoded = Order::default();
    client.decode_json(&mut decoded);
    assert!(client.error().is_none());
    assert_eq!(decoded, order);
}

#[tokio::test]
async fn test_xml_round_trip_with_auto_decode() {
    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Part {
        sku: String,
        quantity: u32,
    }

    let server = start_server().await;
    Mock::given(method("PUT"))
        .and(path("/parts"))
        .respond_with(echo)
        .mount(&server)
        .await;

    let part = Part {
        sku: "NUT-7".to_string(),
        quantity: 12,
    };
    let mut client = HttpClient::put(format!("{}/parts", server.uri()));
    client.set_xml_body(&part).send().await;
    assert!(client.error().is_none());
    assert_eq!(
        client.response().unwrap().content_type(),
        Some("application/xml")
    );

    let mut decoded = Part::default();
    client.auto_decode(&mut decoded);
    assert!(client.error().is_none());
    assert_eq!(decoded, part);
}

#[tokio::test]
async fn test_queries_and_headers_reach_the_server() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("a", "1"))
        .and(query_param("b", "two words"))
        .and(header("accept", "text/html"))
        .and(header("x-request-id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>found</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = HttpClient::new(format!("{}/search", server.uri()));
    client
        .set_queries(HashMap::from([("a", "1"), ("b", "two words")]))
        .set_header_accept("html")
        .add_headers([("X-Request-Id", vec!["abc"])])
        .send()
        .await;

    assert!(client.error().is_none(), "send failed: {:?}", client.error());
    let response = client.response().unwrap();
    assert_eq!(response.status_line(), "200 OK");
    assert_eq!(response.text(), "<p>found</p>");
    assert_eq!(
        response.url().query(),
        Some("a=1&b=two+words"),
        "query string is sorted and encoded once"
    );
}

#[tokio::test]
async fn test_form_body_on_the_wire() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("password=p%40ss&user=ada"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = HttpClient::post(format!("{}/login", server.uri()));
    client
        .set_form_body([("user", "ada"), ("password", "p@ss")])
        .send()
        .await;

    assert!(client.error().is_none());
    assert_eq!(client.response().unwrap().status_code(), 204);
    assert!(client.raw_body().is_empty());
}

#[tokio::test]
async fn test_send_materializes_lazily_and_returns_to_draft() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let mut client = HttpClient::get(server.uri());
    assert!(matches!(client.state(), BuilderState::Draft));

    client.send().await;
    assert!(client.error().is_none());
    assert!(matches!(client.state(), BuilderState::Draft));
    assert_eq!(client.raw_body(), b"ok");

    client.materialize();
    assert!(client.is_ready());
    client.send().await;
    assert!(!client.is_ready());
    assert_eq!(client.raw_body(), b"ok");
}

#[tokio::test]
async fn test_builder_is_reusable_after_failed_send() {
    let mut client = HttpClient::get(closed_port_url());
    client.send().await;

    let err = client.error().expect("connection should be refused");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, HttpClientError::Transport(_)));
    assert!(matches!(client.state(), BuilderState::Draft));
    assert!(client.response().is_none());
    assert!(client.raw_body().is_empty());

    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("up"))
        .mount(&server)
        .await;

    client
        .set_url(format!("{}/health", server.uri()))
        .materialize()
        .send()
        .await;
    assert!(client.error().is_none(), "last successful send clears the slot");
    assert_eq!(client.raw_body(), b"up");
}

#[tokio::test]
async fn test_changes_after_materialize_are_sent() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("new"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = HttpClient::get(format!("{}old", closed_port_url()));
    client.materialize();
    assert!(client.is_ready());

    client.set_url(format!("{}/new", server.uri())).send().await;
    assert!(client.error().is_none(), "send failed: {:?}", client.error());
    assert_eq!(client.raw_body(), b"new");
}

#[tokio::test]
async fn test_failed_send_discards_previous_response() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("first"))
        .mount(&server)
        .await;

    let mut client = HttpClient::get(server.uri());
    client.send().await;
    assert_eq!(client.raw_body(), b"first");

    client.set_url(closed_port_url()).send().await;
    assert!(client.error().is_some());
    assert!(client.response().is_none());
}

#[tokio::test]
async fn test_empty_url_never_reaches_transport() {
    let mut client = HttpClient::post("");
    client.set_plain_body("ignored").send().await;

    assert_eq!(client.error().unwrap().kind(), ErrorKind::Validation);
    assert!(client.response().is_none());
}

#[tokio::test]
async fn test_error_statuses_are_responses_not_errors() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let mut client = HttpClient::get(server.uri());
    client.send().await;

    assert!(client.error().is_none());
    let response = client.response().unwrap();
    assert_eq!(response.status_line(), "404 Not Found");
    assert_eq!(response.text(), "missing");
}

#[tokio::test]
async fn test_save_to_file_round_trip() {
    let payload: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/blob"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let target = dir.path().join("blob.bin");

    let mut client = HttpClient::get(format!("{}/blob", server.uri()));
    client.send().await.save_to_file(&target);

    assert!(client.error().is_none());
    assert_eq!(std::fs::read(&target).unwrap(), payload);
}

#[tokio::test]
async fn test_stream_body_upload() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("upload.bin");
    std::fs::write(&source, b"\x01\x02\x03 stream").unwrap();

    let server = start_server().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/octet-stream"))
        .respond_with(echo)
        .mount(&server)
        .await;

    let mut client = HttpClient::post(server.uri());
    client.set_stream_body(&source).send().await;

    assert!(client.error().is_none());
    assert_eq!(client.raw_body(), b"\x01\x02\x03 stream");
}

#[tokio::test]
async fn test_multipart_body_on_the_wire() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.csv");
    std::fs::write(&report, "a,b\n1,2\n").unwrap();

    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(echo)
        .mount(&server)
        .await;

    let mut client = HttpClient::post(format!("{}/upload", server.uri()));
    client
        .set_form_data_body([("title", "Q3")], [("report", &report)])
        .send()
        .await;
    assert!(client.error().is_none());

    let response = client.response().unwrap();
    assert!(response
        .content_type()
        .unwrap()
        .starts_with("multipart/form-data; boundary="));
    let body = response.text();
    assert!(body.contains("name=\"title\"\r\n\r\nQ3\r\n"));
    assert!(body.contains("name=\"report\"; filename=\"report.csv\""));
    assert!(body.contains("a,b\n1,2\n"));
}

#[tokio::test]
async fn test_trust_anchor_does_not_affect_plain_http() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain"))
        .mount(&server)
        .await;

    let mut client = HttpClient::get(server.uri());
    client.set_trust_anchor(fixture_ca_path()).materialize();
    assert!(client.request().unwrap().is_scoped());

    client.send().await;
    assert!(client.error().is_none());
    assert_eq!(client.raw_body(), b"plain");
}

#[tokio::test]
async fn test_decode_mismatch_is_decode_error() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("definitely not json", "application/json"),
        )
        .mount(&server)
        .await;

    let mut client = HttpClient::get(server.uri());
    client.send().await;
    assert!(client.error().is_none());

    let mut order = sample_order();
    client.auto_decode(&mut order);
    assert_eq!(client.error().unwrap().kind(), ErrorKind::Decode);
    assert_eq!(order, sample_order(), "target untouched on failure");
}
