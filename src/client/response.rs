//! Buffered responses and their accessors.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use log::debug;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{StatusCode, Version};
use serde::de::DeserializeOwned;
use url::Url;

use super::HttpClient;
use crate::content_type::{mime_essence, ContentKey};
use crate::error_handling::{Codec, HttpClientError};

/// Result of one completed send, body fully buffered.
#[derive(Debug, Clone)]
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) version: Version,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl Response {
    /// Status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Status line such as `"200 OK"`; just the code when the reason is unknown.
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {reason}", self.status.as_u16()),
            None => self.status.as_u16().to_string(),
        }
    }

    /// HTTP version the exchange used.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Final URL, after redirects.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw `Content-Type` value.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Buffered body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Buffered body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl HttpClient {
    /// Response of the last successful send.
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Buffered body of the last successful send; empty if there is none.
    pub fn raw_body(&self) -> &[u8] {
        self.response.as_ref().map(Response::body).unwrap_or_default()
    }

    /// Decodes the buffered body as JSON into `target`.
    ///
    /// On failure the error is recorded and `target` is left untouched.
    pub fn decode_json<T: DeserializeOwned>(&mut self, target: &mut T) -> &mut Self {
        match serde_json::from_slice(self.raw_body()) {
            Ok(value) => *target = value,
            Err(e) => self.record(HttpClientError::Decode {
                codec: Codec::Json,
                message: e.to_string(),
            }),
        }
        self
    }

    /// Decodes the buffered body as XML into `target`.
    ///
    /// On failure the error is recorded and `target` is left untouched.
    pub fn decode_xml<T: DeserializeOwned>(&mut self, target: &mut T) -> &mut Self {
        match quick_xml::de::from_reader(self.raw_body()) {
            Ok(value) => *target = value,
            Err(e) => self.record(HttpClientError::Decode {
                codec: Codec::Xml,
                message: e.to_string(),
            }),
        }
        self
    }

    /// Decodes according to the response `Content-Type`.
    ///
    /// `application/json` and `application/xml` (parameters ignored) go to the
    /// matching decoder. Any other type, or no response at all, is a no-op.
    pub fn auto_decode<T: DeserializeOwned>(&mut self, target: &mut T) -> &mut Self {
        let essence = self
            .response
            .as_ref()
            .and_then(Response::content_type)
            .map(mime_essence)
            .unwrap_or_default();

        if essence == ContentKey::Json.content_type() {
            self.decode_json(target)
        } else if essence == ContentKey::Xml.content_type() {
            self.decode_xml(target)
        } else {
            debug!("No decoder for content type {essence:?}, leaving target as is");
            self
        }
    }

    /// Writes the buffered body to `path`, creating or truncating it.
    ///
    /// A failed write leaves whatever was written on disk.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        let outcome = std::fs::File::create(path).and_then(|mut file| {
            file.write_all(self.raw_body())?;
            file.flush()
        });
        if let Err(source) = outcome {
            self.record(HttpClientError::WriteFile {
                path: path.to_path_buf(),
                source,
            });
        } else {
            debug!("Saved {} bytes to {}", self.raw_body().len(), path.display());
        }
        self
    }
}
