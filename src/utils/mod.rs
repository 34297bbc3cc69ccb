//! Utility functions.
//!
//! This module provides:
//! - String sanitization and truncation for finding messages
//! - CSS selector parsing utilities

pub mod sanitize;
mod selector;

pub use selector::parse_selector_unsafe;
