//! Transport error categorization.
//!
//! Used to tag send failures in log lines with a short, stable label.

/// Categorizes a `reqwest::Error` into a short label.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// One of `builder`, `redirect`, `status`, `timeout`, `request`, `connect`,
/// `body`, `decode` or `other`.
pub fn categorize_transport_error(error: &reqwest::Error) -> &'static str {
    // Timeouts can also be connect errors; report the timeout first
    if error.is_timeout() {
        "timeout"
    } else if error.is_builder() {
        "builder"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_status() {
        "status"
    } else if error.is_connect() {
        "connect"
    } else if error.is_request() {
        "request"
    } else if error.is_body() {
        "body"
    } else if error.is_decode() {
        "decode"
    } else {
        "other"
    }
}
