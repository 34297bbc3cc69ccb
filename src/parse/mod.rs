//! HTML parsing and snapshot extraction.
//!
//! This module turns HTML into the [`DocumentSnapshot`](crate::DocumentSnapshot)
//! the auditor consumes:
//! - Title and meta tags (name, Open Graph, Twitter Cards)
//! - JSON-LD structured data payloads and their Schema.org types
//! - Images, headings, links, and scripts
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;
mod structured;

// Re-export public API
pub use html::{extract_snapshot, snapshot_from_document};
pub use structured::{is_json_ld_type, parse_schema_types, JSON_LD_MIME_TYPE};
