//! Shared resource setup.
//!
//! This module provides functions to initialize:
//! - HTTP clients (shared, or scoped to a trust anchor)
//! - The logger

mod client;
mod logger;

pub use client::{init_client, init_scoped_client};
pub use logger::{init_logger, init_logger_with};
