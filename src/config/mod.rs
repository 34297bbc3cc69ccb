//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (checklist defaults, timeouts, limits)
//! - The SEO checklist record (`SeoConfig`)
//! - CLI option types and parsing

mod constants;
mod seo;
mod types;

// Re-export all constants
pub use constants::*;
pub use seo::SeoConfig;
pub use types::{LogFormat, LogLevel, Opt, OutputFormat};
