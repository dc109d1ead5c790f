//! Content negotiation tables.
//!
//! Maps short content keys (`json`, `form`, `any`, ...) to MIME strings, once
//! for the request `Content-Type` header and once for the `Accept` header.
//! The two tables diverge on purpose: `form` and `form-data` describe request
//! bodies only, and `any` is an accept-side wildcard only. An empty string
//! means "leave the header unset".

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Short content key understood by both negotiation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ContentKey {
    Json,
    Xml,
    Form,
    FormData,
    Plain,
    Html,
    Css,
    Javascript,
    Steam,
    Any,
}

impl ContentKey {
    /// MIME type for the request `Content-Type` header, or `""` for none.
    pub const fn content_type(self) -> &'static str {
        match self {
            ContentKey::Json => "application/json",
            ContentKey::Xml => "application/xml",
            ContentKey::Form => "application/x-www-form-urlencoded",
            ContentKey::FormData => "multipart/form-data",
            ContentKey::Plain => "text/plain",
            ContentKey::Html => "text/html",
            ContentKey::Css => "text/css",
            ContentKey::Javascript => "text/javascript",
            ContentKey::Steam => "application/octet-stream",
            ContentKey::Any => "",
        }
    }

    /// MIME type for the `Accept` header, or `""` for none.
    pub const fn accept(self) -> &'static str {
        match self {
            ContentKey::Json => "application/json",
            ContentKey::Xml => "application/xml",
            ContentKey::Form | ContentKey::FormData => "",
            ContentKey::Plain => "text/plain",
            ContentKey::Html => "text/html",
            ContentKey::Css => "text/css",
            ContentKey::Javascript => "text/javascript",
            ContentKey::Steam => "application/octet-stream",
            ContentKey::Any => "*/*",
        }
    }
}

/// Resolves a content key to its `Content-Type` value.
///
/// Unknown keys resolve to `""`, which callers treat as "do not set the header".
pub fn resolve_content_type(key: &str) -> &'static str {
    ContentKey::from_str(key)
        .map(ContentKey::content_type)
        .unwrap_or("")
}

/// Resolves a content key to its `Accept` value.
///
/// Unknown keys resolve to `""`, which callers treat as "do not set the header".
pub fn resolve_accept(key: &str) -> &'static str {
    ContentKey::from_str(key).map(ContentKey::accept).unwrap_or("")
}

/// Returns the lowercased MIME essence of a header value (parameters stripped).
///
/// `"Application/JSON; charset=utf-8"` becomes `"application/json"`.
pub(crate) fn mime_essence(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
