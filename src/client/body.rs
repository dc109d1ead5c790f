//! Typed request body setters.
//!
//! Each setter first negotiates `Content-Type` through the content table and
//! then fills the body. Failures are written to the error slot and leave the
//! previous body in place.

use std::path::{Path, PathBuf};

use serde::Serialize;
use url::form_urlencoded;

use super::multipart::encode_form_data;
use super::HttpClient;
use crate::content_type::ContentKey;
use crate::error_handling::{Codec, HttpClientError};

impl HttpClient {
    /// Serializes `body` as JSON.
    ///
    /// Owns the error slot: a successful encode clears an earlier error.
    pub fn set_json_body<T: Serialize + ?Sized>(&mut self, body: &T) -> &mut Self {
        self.set_header_content_type(ContentKey::Json.as_ref());
        let outcome = serde_json::to_vec(body)
            .map(|bytes| self.spec_mut().body = bytes.into())
            .map_err(|e| HttpClientError::Encode {
                codec: Codec::Json,
                message: e.to_string(),
            });
        self.settle(outcome);
        self
    }

    /// Serializes `body` as XML, using the type name as the root element.
    ///
    /// Owns the error slot: a successful encode clears an earlier error.
    pub fn set_xml_body<T: Serialize + ?Sized>(&mut self, body: &T) -> &mut Self {
        self.set_header_content_type(ContentKey::Xml.as_ref());
        let outcome = quick_xml::se::to_string(body)
            .map(|xml| self.spec_mut().body = xml.into_bytes().into())
            .map_err(|e| HttpClientError::Encode {
                codec: Codec::Xml,
                message: e.to_string(),
            });
        self.settle(outcome);
        self
    }

    /// URL-encodes `fields` as an `application/x-www-form-urlencoded` body.
    ///
    /// Fields are encoded in key order, so the output is deterministic.
    pub fn set_form_body<I, K, V>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_header_content_type(ContentKey::Form.as_ref());
        self.spec_mut().body = encode_form(fields).into_bytes().into();
        self
    }

    /// Builds a `multipart/form-data` body from text fields and files.
    ///
    /// `files` maps a field name to the path of the file to upload. Any read
    /// failure aborts the whole call: body and `Content-Type` keep their
    /// previous values.
    pub fn set_form_data_body<T, TK, TV, F, FK, P>(&mut self, texts: T, files: F) -> &mut Self
    where
        T: IntoIterator<Item = (TK, TV)>,
        TK: Into<String>,
        TV: Into<String>,
        F: IntoIterator<Item = (FK, P)>,
        FK: Into<String>,
        P: AsRef<Path>,
    {
        let texts: Vec<(String, String)> =
            texts.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        let files: Vec<(String, PathBuf)> = files
            .into_iter()
            .map(|(k, p)| (k.into(), p.as_ref().to_path_buf()))
            .collect();

        match encode_form_data(&texts, &files) {
            Ok((body, content_type)) => {
                self.spec_mut().replace_header("Content-Type", &content_type);
                self.spec_mut().body = body.into();
            }
            Err(e) => self.record(e),
        }
        self
    }

    /// Sets a `text/plain` body.
    pub fn set_plain_body(&mut self, text: impl Into<String>) -> &mut Self {
        self.set_text_body(ContentKey::Plain, text.into())
    }

    /// Sets a `text/html` body.
    pub fn set_html_body(&mut self, text: impl Into<String>) -> &mut Self {
        self.set_text_body(ContentKey::Html, text.into())
    }

    /// Sets a `text/css` body.
    pub fn set_css_body(&mut self, text: impl Into<String>) -> &mut Self {
        self.set_text_body(ContentKey::Css, text.into())
    }

    /// Sets a `text/javascript` body.
    pub fn set_javascript_body(&mut self, text: impl Into<String>) -> &mut Self {
        self.set_text_body(ContentKey::Javascript, text.into())
    }

    /// Reads the whole file at `path` into an `application/octet-stream` body.
    pub fn set_stream_body(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.set_header_content_type(ContentKey::Steam.as_ref());
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(data) => self.spec_mut().body = data.into(),
            Err(source) => self.record(HttpClientError::ReadFile {
                path: path.to_path_buf(),
                source,
            }),
        }
        self
    }

    fn set_text_body(&mut self, key: ContentKey, text: String) -> &mut Self {
        self.set_header_content_type(key.as_ref());
        self.spec_mut().body = text.into_bytes().into();
        self
    }
}

/// Encodes key/value pairs as `application/x-www-form-urlencoded`, sorted by key.
pub(crate) fn encode_form<I, K, V>(fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut pairs: Vec<(String, String)> = fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    pairs.sort();

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
