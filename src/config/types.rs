//! Configuration types.
//!
//! This module defines the transport configuration shared by every builder,
//! plus the logging settings consumed by [`init_logger`](crate::init_logger).

use thiserror::Error;

use crate::config::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Transport configuration for a builder.
///
/// Every [`HttpClient`](crate::HttpClient) carries one of these. It is turned
/// into a `reqwest::Client` the first time the builder materializes a request,
/// and again for every request scoped to a trust anchor.
///
/// # Examples
///
/// ```
/// use fluent_http::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     connect_timeout_seconds: 2,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Total per-request timeout in seconds
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum redirect hops followed by the transport (0 disables redirects)
    pub max_redirects: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what would be accepted
    pub message: String,
}

impl Config {
    /// Checks the configuration for values the transport cannot honor.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field:
    /// - `timeout_seconds` must be greater than 0
    /// - `connect_timeout_seconds` must be greater than 0 and not exceed `timeout_seconds`
    /// - `user_agent` must not be empty
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.connect_timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "connect_timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(ConfigValidationError {
                field: "connect_timeout_seconds",
                message: format!(
                    "must not exceed timeout_seconds ({}), got {}",
                    self.timeout_seconds, self.connect_timeout_seconds
                ),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
