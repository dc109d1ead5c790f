//! Mutable request draft.

use std::collections::BTreeMap;

use bytes::Bytes;

/// Everything a builder has been told about the next request.
///
/// Nothing here is validated until the builder materializes. Queries and
/// headers are kept sorted so the materialized URL and header order are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct RequestSpec {
    pub(crate) url: String,
    pub(crate) method: String,
    pub(crate) queries: BTreeMap<String, String>,
    pub(crate) headers: BTreeMap<String, Vec<String>>,
    pub(crate) body: Bytes,
    pub(crate) trust_anchor: Option<Vec<u8>>,
}

impl RequestSpec {
    pub(crate) fn new(url: String) -> Self {
        Self {
            url,
            ..Default::default()
        }
    }

    /// Target URL, without the query parameters.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP method; empty until set or defaulted at materialization.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Query parameters appended to the URL at materialization.
    pub fn queries(&self) -> &BTreeMap<String, String> {
        &self.queries
    }

    /// Request headers, each with its ordered values.
    pub fn headers(&self) -> &BTreeMap<String, Vec<String>> {
        &self.headers
    }

    /// Values of `name`, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// Request body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// PEM trust anchor, if one was set.
    pub fn trust_anchor(&self) -> Option<&[u8]> {
        self.trust_anchor.as_deref()
    }

    /// Replaces every value of `name` (any casing) with `value`.
    pub(crate) fn replace_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), vec![value.to_string()]);
    }

    /// Appends `values` to the header stored under exactly `name`.
    pub(crate) fn append_header(&mut self, name: String, values: Vec<String>) {
        self.headers.entry(name).or_default().extend(values);
    }
}
