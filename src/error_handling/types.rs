//! Error type definitions.
//!
//! Audit problems are never errors: they are reported as findings. The types
//! here cover the ambient failures around an audit (logger setup, loading the
//! document, loading the checklist).

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading the HTML document to audit.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a local file or stdin failed.
    #[error("Failed to read {source_name}: {source}")]
    Io {
        /// Display name of the source, e.g. the path or `stdin`
        source_name: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request itself failed (connect, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} returned for {url}")]
    Status {
        /// Final URL after redirects
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The document exceeds the body size limit.
    #[error("Document too large: {size} bytes (limit {limit} bytes)")]
    TooLarge {
        /// Size of the document in bytes
        size: usize,
        /// Maximum accepted size in bytes
        limit: usize,
    },
}

/// Error types for loading an SEO checklist configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has wrongly typed fields.
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A minimum length bound exceeds its maximum.
    #[error("Invalid {field} length bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        /// `title` or `description`
        field: &'static str,
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },
}
