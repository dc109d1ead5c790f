//! One-call request shortcuts.
//!
//! [`HttpClientSdk`] joins a host and a path, picks the negotiation header
//! from the method and sends in a single call:
//!
//! - `GET` announces the format through `Accept`
//! - `POST`, `PUT` and `DELETE` declare it through `Content-Type`
//!
//! ```no_run
//! use fluent_http::HttpClientSdk;
//!
//! # async fn example() {
//! let client = HttpClientSdk::get("https://api.example.com", "/v1/status", [("verbose", "1")])
//!     .any()
//!     .await;
//! println!("{}", String::from_utf8_lossy(client.raw_body()));
//! # }
//! ```

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;

use crate::client::{encode_form, HttpClient};
use crate::content_type::ContentKey;
use crate::error_handling::{Codec, HttpClientError};

/// A prepared request waiting for its body format.
#[derive(Debug)]
pub struct HttpClientSdk {
    method: Method,
    client: HttpClient,
}

impl HttpClientSdk {
    /// Prepares a GET request to `host` + `path`.
    pub fn get<I, K, V>(host: &str, path: &str, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(Method::GET, host, path, queries)
    }

    /// Prepares a POST request to `host` + `path`.
    pub fn post<I, K, V>(host: &str, path: &str, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(Method::POST, host, path, queries)
    }

    /// Prepares a PUT request to `host` + `path`.
    pub fn put<I, K, V>(host: &str, path: &str, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(Method::PUT, host, path, queries)
    }

    /// Prepares a DELETE request to `host` + `path`.
    pub fn delete<I, K, V>(host: &str, path: &str, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(Method::DELETE, host, path, queries)
    }

    fn new<I, K, V>(method: Method, host: &str, path: &str, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut client = HttpClient::new(join_url(host, path));
        client.set_method(&method).set_queries(queries);
        Self { method, client }
    }

    /// The underlying builder, e.g. to add headers before sending.
    pub fn client_mut(&mut self) -> &mut HttpClient {
        &mut self.client
    }

    /// Sends `body` encoded as JSON.
    pub async fn json<T: Serialize + ?Sized>(mut self, body: &T) -> HttpClient {
        self.negotiate(ContentKey::Json);
        match serde_json::to_vec(body) {
            Ok(bytes) => self.dispatch(bytes).await,
            Err(e) => self.abort(HttpClientError::Encode {
                codec: Codec::Json,
                message: e.to_string(),
            }),
        }
    }

    /// Sends `body` encoded as XML.
    pub async fn xml<T: Serialize + ?Sized>(mut self, body: &T) -> HttpClient {
        self.negotiate(ContentKey::Xml);
        match quick_xml::se::to_string(body) {
            Ok(xml) => self.dispatch(xml).await,
            Err(e) => self.abort(HttpClientError::Encode {
                codec: Codec::Xml,
                message: e.to_string(),
            }),
        }
    }

    /// Sends `fields` as a URL-encoded form.
    pub async fn form<I, K, V>(mut self, fields: I) -> HttpClient
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.negotiate(ContentKey::Form);
        self.dispatch(encode_form(fields)).await
    }

    /// Sends plain text.
    pub async fn plain(mut self, text: impl Into<String>) -> HttpClient {
        self.negotiate(ContentKey::Plain);
        self.dispatch(text.into()).await
    }

    /// Sends HTML.
    pub async fn html(mut self, text: impl Into<String>) -> HttpClient {
        self.negotiate(ContentKey::Html);
        self.dispatch(text.into()).await
    }

    /// Sends CSS.
    pub async fn css(mut self, text: impl Into<String>) -> HttpClient {
        self.negotiate(ContentKey::Css);
        self.dispatch(text.into()).await
    }

    /// Sends JavaScript.
    pub async fn javascript(mut self, text: impl Into<String>) -> HttpClient {
        self.negotiate(ContentKey::Javascript);
        self.dispatch(text.into()).await
    }

    /// Sends raw bytes as `application/octet-stream`.
    pub async fn steam(mut self, data: impl Into<Bytes>) -> HttpClient {
        self.negotiate(ContentKey::Steam);
        self.dispatch(data).await
    }

    /// Sends without a body, accepting any format on GET.
    pub async fn any(mut self) -> HttpClient {
        self.negotiate(ContentKey::Any);
        self.client.send().await;
        self.client
    }

    fn negotiate(&mut self, key: ContentKey) {
        match self.method {
            Method::GET => {
                self.client.set_header_accept(key.as_ref());
            }
            Method::POST | Method::PUT | Method::DELETE => {
                self.client.set_header_content_type(key.as_ref());
            }
            _ => {}
        }
    }

    async fn dispatch(mut self, body: impl Into<Bytes>) -> HttpClient {
        self.client.set_body(body).send().await;
        self.client
    }

    fn abort(mut self, err: HttpClientError) -> HttpClient {
        self.client.record(err);
        self.client
    }
}

/// Joins a host and a path with exactly one `/` between them.
fn join_url(host: &str, path: &str) -> String {
    let host = host.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match (host.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => host.to_string(),
        (false, false) => format!("{host}/{path}"),
    }
}
