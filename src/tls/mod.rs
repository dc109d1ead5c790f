//! Trust anchor handling.
//!
//! Turns PEM-encoded certificate data into a rustls `ClientConfig` whose root
//! store contains only those certificates. The config is handed to reqwest so
//! a single request verifies its peer against a custom pool instead of the
//! bundled web PKI roots.

use std::sync::Arc;

use log::{debug, warn};
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::CertificateDer;
use rustls::{ClientConfig, RootCertStore};

use crate::error_handling::HttpClientError;

/// Parses every certificate in `pem` into a root store.
///
/// Certificates rustls refuses as trust anchors are skipped with a warning.
///
/// # Errors
///
/// Returns `HttpClientError::TrustAnchor` if the PEM data is malformed or no
/// certificate could be added.
pub fn build_root_store(pem: &[u8]) -> Result<RootCertStore, HttpClientError> {
    let mut root_store = RootCertStore::empty();

    for cert in CertificateDer::pem_slice_iter(pem) {
        let cert = cert
            .map_err(|e| HttpClientError::TrustAnchor(format!("malformed PEM data: {e}")))?;
        if let Err(e) = root_store.add(cert) {
            warn!("Skipping certificate rejected as trust anchor: {e}");
        }
    }

    if root_store.is_empty() {
        return Err(HttpClientError::TrustAnchor(
            "no usable certificate found in PEM data".to_string(),
        ));
    }

    debug!("Built trust anchor pool with {} certificate(s)", root_store.len());
    Ok(root_store)
}

/// Builds a TLS client configuration scoped to the certificates in `pem`.
///
/// # Errors
///
/// Returns `HttpClientError::TrustAnchor` if the root store cannot be built or
/// the protocol versions are rejected by the crypto provider.
pub fn build_trust_config(pem: &[u8]) -> Result<ClientConfig, HttpClientError> {
    let root_store = build_root_store(pem)?;

    // Pin the provider so the config never depends on a process-wide default
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| HttpClientError::TrustAnchor(e.to_string()))?
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(config)
}
