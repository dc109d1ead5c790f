//! Turning a request draft into a transport-ready request.

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use super::{BuilderState, HttpClient};
use crate::config::DEFAULT_METHOD;
use crate::error_handling::HttpClientError;
use crate::initialization::{init_client, init_scoped_client};

/// A finalized request plus the client that will carry it.
///
/// Owned by the builder that created it and replaced on every
/// [`HttpClient::materialize`].
#[derive(Debug)]
pub struct MaterializedRequest {
    pub(crate) request: reqwest::Request,
    pub(crate) client: reqwest::Client,
    scoped: bool,
}

impl MaterializedRequest {
    /// Final method.
    pub fn method(&self) -> &Method {
        self.request.method()
    }

    /// Final URL, query string included.
    pub fn url(&self) -> &Url {
        self.request.url()
    }

    /// Final request headers.
    pub fn headers(&self) -> &HeaderMap {
        self.request.headers()
    }

    /// Body bytes, or `None` when the request has no body.
    pub fn body(&self) -> Option<&[u8]> {
        self.request.body().and_then(|b| b.as_bytes())
    }

    /// Whether TLS verification is scoped to the builder's trust anchor.
    pub fn is_scoped(&self) -> bool {
        self.scoped
    }
}

impl HttpClient {
    /// Builds a [`MaterializedRequest`] from the current spec.
    ///
    /// Steps, in order:
    /// 1. The URL must be non-empty; an empty method becomes `GET`
    /// 2. Method and URL are parsed
    /// 3. Query parameters are encoded onto the URL
    /// 4. Headers are applied, keeping every value
    /// 5. The body is attached
    /// 6. A transport is chosen: scoped to the trust anchor if one is set,
    ///    otherwise the builder's shared client
    ///
    /// Owns the error slot. On success the builder is `Ready` and the slot is
    /// cleared; on failure the slot holds the error and the builder is `Draft`.
    pub fn materialize(&mut self) -> &mut Self {
        // A previous materialization never survives a new attempt
        self.state = BuilderState::Draft;

        match self.build_request() {
            Ok(materialized) => {
                debug!(
                    "Materialized {} {} (scoped TLS: {})",
                    materialized.method(),
                    materialized.url(),
                    materialized.is_scoped()
                );
                self.state = BuilderState::Ready(materialized);
                self.settle(Ok(()));
            }
            Err(e) => self.settle(Err(e)),
        }
        self
    }

    fn build_request(&mut self) -> Result<MaterializedRequest, HttpClientError> {
        if self.spec.url.trim().is_empty() {
            return Err(HttpClientError::Validation(
                "url must not be empty".to_string(),
            ));
        }
        if self.spec.method.is_empty() {
            self.spec.method = DEFAULT_METHOD.to_string();
        }

        let method = Method::from_bytes(self.spec.method.as_bytes()).map_err(|e| {
            HttpClientError::Build(format!("invalid method {:?}: {e}", self.spec.method))
        })?;
        let mut url = Url::parse(&self.spec.url)
            .map_err(|e| HttpClientError::Build(format!("invalid url {:?}: {e}", self.spec.url)))?;

        if !self.spec.queries.is_empty() {
            url.query_pairs_mut().extend_pairs(self.spec.queries.iter());
        }

        let mut headers = HeaderMap::new();
        for (name, values) in &self.spec.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                HttpClientError::Build(format!("invalid header name {name:?}: {e}"))
            })?;
            for value in values {
                let header_value = HeaderValue::from_str(value).map_err(|e| {
                    HttpClientError::Build(format!("invalid value for header {name}: {e}"))
                })?;
                headers.append(header_name.clone(), header_value);
            }
        }

        let mut request = reqwest::Request::new(method, url);
        *request.headers_mut() = headers;
        if !self.spec.body.is_empty() {
            *request.body_mut() = Some(reqwest::Body::from(self.spec.body.clone()));
        }

        let (client, scoped) = if let Some(pem) = self.spec.trust_anchor.as_deref() {
            (init_scoped_client(&self.config, pem)?, true)
        } else {
            (self.shared_client()?, false)
        };

        Ok(MaterializedRequest {
            request,
            client,
            scoped,
        })
    }

    fn shared_client(&mut self) -> Result<reqwest::Client, HttpClientError> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }
        let client = init_client(&self.config)?;
        self.client = Some(client.clone());
        Ok(client)
    }
}
