//! Error handling.
//!
//! This module provides:
//! - The [`HttpClientError`] recorded in a builder's error slot
//! - [`ErrorKind`] categories (configuration, validation, transport, decode)
//! - Transport error labelling for logs
//!
//! Errors are never raised out of a fluent chain. Each step writes its
//! outcome into the builder's slot and the caller inspects it afterwards.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_transport_error;
pub use types::{Codec, ErrorKind, HttpClientError};
