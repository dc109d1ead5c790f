//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` a builder dispatches through,
//! either the shared one or one scoped to a trust anchor.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::HttpClientError;
use crate::tls::build_trust_config;

/// Initializes the HTTP client with the given settings.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Total and connect timeouts from config
/// - Redirect following up to `max_redirects` hops
/// - Rustls TLS backend with the bundled web PKI roots
///
/// # Errors
///
/// Returns `HttpClientError::ClientInit` if the config is invalid or client
/// creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, HttpClientError> {
    base_builder(config)?
        .build()
        .map_err(|e| HttpClientError::ClientInit(e.to_string()))
}

/// Initializes an HTTP client that only trusts the certificates in `pem`.
///
/// Same settings as [`init_client`], but TLS peers are verified against a
/// root store built from the trust anchor instead of the bundled roots.
///
/// # Errors
///
/// Returns `HttpClientError::TrustAnchor` if the PEM data yields no usable
/// certificate, or `HttpClientError::ClientInit` if client creation fails.
pub fn init_scoped_client(config: &Config, pem: &[u8]) -> Result<reqwest::Client, HttpClientError> {
    let tls_config = build_trust_config(pem)?;
    base_builder(config)?
        .use_preconfigured_tls(tls_config)
        .build()
        .map_err(|e| HttpClientError::ClientInit(e.to_string()))
}

fn base_builder(config: &Config) -> Result<ClientBuilder, HttpClientError> {
    config
        .validate()
        .map_err(|e| HttpClientError::ClientInit(e.to_string()))?;

    let redirect = if config.max_redirects == 0 {
        reqwest::redirect::Policy::none()
    } else {
        reqwest::redirect::Policy::limited(config.max_redirects)
    };

    Ok(ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(redirect))
}
