//! Error handling.
//!
//! Error types are categorized into:
//! - **Initialization**: logger and HTTP client setup
//! - **Load**: reading the document from a file, stdin, or a URL
//! - **Config**: reading and validating the SEO checklist

mod types;

// Re-export public API
pub use types::{ConfigError, InitializationError, LoadError};
