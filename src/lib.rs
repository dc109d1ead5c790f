//! fluent_http library: a fluent HTTP(S) request builder
//!
//! This library provides a chainable request builder with lazy
//! materialization, content-negotiation helpers, fully buffered responses and
//! a concurrent batch mode for firing many independent requests at once.
//!
//! # Example
//!
//! ```no_run
//! use fluent_http::{HttpClient, HttpClientMultiple};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Status {
//!     healthy: bool,
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut client = HttpClient::get("https://api.example.com/status");
//! client.set_header_accept("json").send().await;
//!
//! let mut status = Status::default();
//! client.decode_json(&mut status);
//! if let Some(e) = client.error() {
//!     eprintln!("status check failed: {e}");
//! }
//!
//! let mut batch = HttpClientMultiple::new();
//! for region in ["eu", "us", "ap"] {
//!     batch.add(HttpClient::get(format!("https://{region}.example.com/ping")));
//! }
//! batch.send_all().await;
//! for (i, client) in batch.failed() {
//!     eprintln!("request {i} failed: {:?}", client.error());
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! Sending requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling `send` within an async context.

mod batch;
mod client;
pub mod config;
pub mod content_type;
mod error_handling;
pub mod initialization;
mod sdk;
mod tls;

// Re-export public API
pub use batch::HttpClientMultiple;
pub use client::{BuilderState, HttpClient, MaterializedRequest, RequestSpec, Response};
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use content_type::{resolve_accept, resolve_content_type, ContentKey};
pub use error_handling::{categorize_transport_error, Codec, ErrorKind, HttpClientError};
pub use initialization::{init_logger, init_logger_with};
pub use sdk::HttpClientSdk;
