// Shared test helpers for mock servers and fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::TcpListener;
use std::path::PathBuf;

use wiremock::{MockServer, Request, ResponseTemplate};

/// Returns a loopback URL on a port nothing is listening on.
///
/// The port is bound and released immediately, so connecting to it is refused.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{addr}/")
}

/// Responds with the request body and content type unchanged.
#[allow(dead_code)]
pub fn echo(req: &Request) -> ResponseTemplate {
    let content_type = req
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    ResponseTemplate::new(200).set_body_raw(req.body.clone(), &content_type)
}

/// Starts a mock server for a single test.
#[allow(dead_code)]
pub async fn start_server() -> MockServer {
    MockServer::start().await
}

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Path to the self-signed CA certificate used as a trust anchor fixture.
///
/// `server.pem` (key in `server.key`) is issued by this CA for `localhost`
/// and `127.0.0.1`; `other_ca.pem` is an unrelated CA.
#[allow(dead_code)]
pub fn fixture_ca_path() -> PathBuf {
    fixture_path("ca.pem")
}
