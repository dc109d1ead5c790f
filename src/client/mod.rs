//! Fluent request builder.
//!
//! [`HttpClient`] accumulates a [`RequestSpec`], materializes it into a
//! transport-ready request and sends it, buffering the response in memory.
//!
//! Every mutator returns `&mut Self` and records failures in the builder's
//! error slot instead of returning them, so a whole chain can be written
//! before checking [`HttpClient::error`]:
//!
//! ```no_run
//! use fluent_http::HttpClient;
//!
//! # async fn example() {
//! let mut client = HttpClient::post("https://example.com/api/users");
//! client
//!     .set_queries([("dry_run", "true")])
//!     .set_header_accept("json")
//!     .set_json_body(&serde_json::json!({ "name": "ada" }))
//!     .send()
//!     .await;
//!
//! if let Some(e) = client.error() {
//!     eprintln!("request failed: {e}");
//! }
//! # }
//! ```
//!
//! The slot is last-write-wins. A later step that succeeds and owns the slot
//! (JSON/XML body encoding, materialization, send) clears an earlier error,
//! so it must be checked after each chain rather than only at the very end
//! of a long-lived builder's life.

mod body;
mod materialize;
mod multipart;
mod response;
mod send;
mod spec;

use std::path::Path;

use bytes::Bytes;
use log::warn;

use crate::config::Config;
use crate::content_type::{resolve_accept, resolve_content_type};
use crate::error_handling::HttpClientError;

pub(crate) use body::encode_form;
pub use materialize::MaterializedRequest;
pub use response::Response;
pub use spec::RequestSpec;

/// Lifecycle of a builder.
///
/// `Draft --materialize ok--> Ready --send--> Draft`. A failed
/// materialization leaves the builder in `Draft`; a send always returns it to
/// `Draft`, whatever the outcome, so builders can be reconfigured and resent.
/// Changing the request, its config or its client while `Ready` also drops
/// back to `Draft`.
#[derive(Debug, Default)]
pub enum BuilderState {
    /// Spec is mutable and nothing has been materialized.
    #[default]
    Draft,
    /// A materialized request is waiting to be sent.
    Ready(MaterializedRequest),
}

/// Fluent HTTP request builder.
#[derive(Debug)]
pub struct HttpClient {
    spec: RequestSpec,
    state: BuilderState,
    config: Config,
    client: Option<reqwest::Client>,
    response: Option<Response>,
    err: Option<HttpClientError>,
}

impl HttpClient {
    /// Creates a builder for `url` with the default [`Config`].
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_config(url, Config::default())
    }

    /// Creates a builder for `url` with an explicit transport configuration.
    pub fn with_config(url: impl Into<String>, config: Config) -> Self {
        Self {
            spec: RequestSpec::new(url.into()),
            state: BuilderState::Draft,
            config,
            client: None,
            response: None,
            err: None,
        }
    }

    /// Creates a GET builder.
    pub fn get(url: impl Into<String>) -> Self {
        let mut client = Self::new(url);
        client.set_method("GET");
        client
    }

    /// Creates a POST builder.
    pub fn post(url: impl Into<String>) -> Self {
        let mut client = Self::new(url);
        client.set_method("POST");
        client
    }

    /// Creates a PUT builder.
    pub fn put(url: impl Into<String>) -> Self {
        let mut client = Self::new(url);
        client.set_method("PUT");
        client
    }

    /// Creates a DELETE builder.
    pub fn delete(url: impl Into<String>) -> Self {
        let mut client = Self::new(url);
        client.set_method("DELETE");
        client
    }

    /// Dispatches through `client` instead of building one from the config.
    ///
    /// Lets many builders share one connection pool. Requests with a trust
    /// anchor still get their own scoped client.
    pub fn with_client(&mut self, client: reqwest::Client) -> &mut Self {
        self.state = BuilderState::Draft;
        self.client = Some(client);
        self
    }

    /// Replaces the transport configuration.
    ///
    /// Drops the cached shared client so the next materialization rebuilds it.
    pub fn set_config(&mut self, config: Config) -> &mut Self {
        self.state = BuilderState::Draft;
        self.config = config;
        self.client = None;
        self
    }

    /// Sets the target URL.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.spec_mut().url = url.into();
        self
    }

    /// Sets the HTTP method. An empty method becomes `GET` at materialization.
    pub fn set_method(&mut self, method: impl AsRef<str>) -> &mut Self {
        self.spec_mut().method = method.as_ref().to_string();
        self
    }

    /// Replaces the query parameters.
    pub fn set_queries<I, K, V>(&mut self, queries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.spec_mut().queries = queries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Replaces all headers.
    pub fn set_headers<I, K, V, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec_mut().headers.clear();
        self.add_headers(headers)
    }

    /// Appends header values, keeping any already present.
    pub fn add_headers<I, K, V, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (name, values) in headers {
            self.spec_mut()
                .append_header(name.into(), values.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Sets the raw request body.
    pub fn set_body(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.spec_mut().body = body.into();
        self
    }

    /// Reads PEM certificate data from `path` to use as this request's only trust anchor.
    pub fn set_trust_anchor(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(pem) => self.spec_mut().trust_anchor = Some(pem),
            Err(source) => self.record(HttpClientError::ReadFile {
                path: path.to_path_buf(),
                source,
            }),
        }
        self
    }

    /// Uses in-memory PEM certificate data as this request's only trust anchor.
    pub fn set_trust_anchor_pem(&mut self, pem: impl Into<Vec<u8>>) -> &mut Self {
        self.spec_mut().trust_anchor = Some(pem.into());
        self
    }

    /// Sets `Content-Type` from a content key; unknown or empty keys are ignored.
    pub fn set_header_content_type(&mut self, key: &str) -> &mut Self {
        let value = resolve_content_type(key);
        if !value.is_empty() {
            self.spec_mut().replace_header("Content-Type", value);
        }
        self
    }

    /// Sets `Accept` from a content key; unknown or empty keys are ignored.
    pub fn set_header_accept(&mut self, key: &str) -> &mut Self {
        let value = resolve_accept(key);
        if !value.is_empty() {
            self.spec_mut().replace_header("Accept", value);
        }
        self
    }

    /// The request draft.
    pub fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    /// Transport configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    /// Whether a materialized request is waiting to be sent.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, BuilderState::Ready(_))
    }

    /// The materialized request, while the builder is `Ready`.
    pub fn request(&self) -> Option<&MaterializedRequest> {
        match &self.state {
            BuilderState::Ready(materialized) => Some(materialized),
            BuilderState::Draft => None,
        }
    }

    /// The most recent error written to the slot, if any.
    pub fn error(&self) -> Option<&HttpClientError> {
        self.err.as_ref()
    }

    /// Removes and returns the error in the slot.
    pub fn take_error(&mut self) -> Option<HttpClientError> {
        self.err.take()
    }

    /// Mutable access to the draft. Any pending materialized request is dropped,
    /// so the next send rebuilds from the updated draft.
    pub(crate) fn spec_mut(&mut self) -> &mut RequestSpec {
        self.state = BuilderState::Draft;
        &mut self.spec
    }

    /// Writes `err` into the slot, replacing whatever was there.
    pub(crate) fn record(&mut self, err: HttpClientError) {
        warn!("{} {}: {err}", self.spec.method, self.spec.url);
        self.err = Some(err);
    }

    /// Stores the outcome of a step that owns the slot: success clears it.
    pub(crate) fn settle(&mut self, outcome: Result<(), HttpClientError>) {
        match outcome {
            Ok(()) => self.err = None,
            Err(e) => self.record(e),
        }
    }
}
