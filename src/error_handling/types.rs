//! Error type definitions.
//!
//! This module defines the error stored in a builder's error slot and the
//! coarse kinds callers match on.

use std::path::PathBuf;

use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Body codec involved in an encode or decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Codec {
    #[strum(serialize = "JSON")]
    Json,
    #[strum(serialize = "XML")]
    Xml,
}

/// Coarse error categories.
///
/// Every [`HttpClientError`] belongs to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Bad serialization, unreadable file, multipart or TLS setup failure
    Configuration,
    /// Request spec is missing something required at materialization
    Validation,
    /// Engine-level send failure or response body read failure
    Transport,
    /// Response body does not match the target codec
    Decode,
}

/// Error recorded in a builder's error slot.
#[derive(Error, Debug)]
pub enum HttpClientError {
    /// Request body could not be serialized.
    #[error("Failed to encode {codec} body: {message}")]
    Encode { codec: Codec, message: String },

    /// A file feeding the request body or trust anchor could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Multipart body could not be assembled.
    #[error("Failed to build multipart body: {0}")]
    Multipart(String),

    /// Trust anchor PEM did not yield a usable certificate pool.
    #[error("Invalid trust anchor: {0}")]
    TrustAnchor(String),

    /// Transport client could not be constructed.
    #[error("HTTP client initialization error: {0}")]
    ClientInit(String),

    /// Request spec is incomplete (e.g. empty URL).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The engine rejected the method or URL.
    #[error("Failed to generate request: {0}")]
    Build(String),

    /// Connection refused, timeout, TLS failure and other engine errors.
    #[error("Send failed: {0}")]
    Transport(#[source] ReqwestError),

    /// The response arrived but its body could not be read in full.
    #[error("Failed to read response body: {0}")]
    Body(#[source] ReqwestError),

    /// Buffered response body does not decode into the target.
    #[error("Failed to decode {codec} response body: {message}")]
    Decode { codec: Codec, message: String },

    /// Buffered response body could not be persisted.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HttpClientError {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpClientError::Encode { .. }
            | HttpClientError::ReadFile { .. }
            | HttpClientError::Multipart(_)
            | HttpClientError::TrustAnchor(_)
            | HttpClientError::ClientInit(_)
            | HttpClientError::Build(_)
            | HttpClientError::WriteFile { .. } => ErrorKind::Configuration,
            HttpClientError::Validation(_) => ErrorKind::Validation,
            HttpClientError::Transport(_) | HttpClientError::Body(_) => ErrorKind::Transport,
            HttpClientError::Decode { .. } => ErrorKind::Decode,
        }
    }
}
