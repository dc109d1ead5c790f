//! Configuration constants.
//!
//! This module defines the defaults used when a builder is created without an
//! explicit [`Config`](super::Config).

/// Total per-request timeout in seconds (connect + send + body read)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
/// Kept well under the total timeout so unreachable hosts fail fast
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Maximum number of redirect hops the transport follows before giving up
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via [`Config::user_agent`](super::Config::user_agent).
pub const DEFAULT_USER_AGENT: &str = concat!("fluent_http/", env!("CARGO_PKG_VERSION"));

/// Method used when a request is materialized without one.
pub const DEFAULT_METHOD: &str = "GET";

/// Content-Type attached to every file part of a multipart body.
pub const MULTIPART_FILE_CONTENT_TYPE: &str = "application/octet-stream";
