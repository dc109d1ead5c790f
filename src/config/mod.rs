//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, default user agent, etc.)
//! - The transport [`Config`] and its validation
//! - Logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
