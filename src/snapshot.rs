//! Read-only document view consumed by the auditor.
//!
//! A `DocumentSnapshot` carries only the facts the checklist looks at. It can
//! be built from HTML with [`crate::parse::extract_snapshot`] or assembled by
//! hand, which keeps every check testable without a parser.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attribute presence flags for one `<img>` element.
///
/// A flag is `true` only when the attribute exists with a non-empty value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Has alt text
    pub has_alt: bool,
    /// Has a `width` attribute
    pub has_width: bool,
    /// Has a `height` attribute
    pub has_height: bool,
    /// `loading="lazy"`
    pub lazy: bool,
}

impl ImageInfo {
    /// An image carrying alt text, both dimensions, and lazy loading.
    pub fn complete() -> Self {
        Self {
            has_alt: true,
            has_width: true,
            has_height: true,
            lazy: true,
        }
    }

    /// True when both `width` and `height` are set.
    pub fn has_dimensions(&self) -> bool {
        self.has_width && self.has_height
    }
}

/// One `<a>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    /// Raw `href` value; `None` when the attribute is absent
    pub href: Option<String>,
    /// Raw `rel` value
    pub rel: Option<String>,
}

impl LinkInfo {
    /// A link to `href` without a `rel` attribute.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            rel: None,
        }
    }

    /// Sets the `rel` attribute.
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// True for `http://` and `https://` targets.
    pub fn is_absolute(&self) -> bool {
        self.href
            .as_deref()
            .is_some_and(|href| href.starts_with("http://") || href.starts_with("https://"))
    }

    /// True when the href is missing, empty, or the `#` placeholder.
    pub fn is_broken_anchor(&self) -> bool {
        matches!(self.href.as_deref(), None | Some("") | Some("#"))
    }

    /// True when `rel` contains `token` anywhere in its value.
    pub fn has_rel(&self, token: &str) -> bool {
        self.rel.as_deref().is_some_and(|rel| rel.contains(token))
    }
}

/// One `<script>` element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptInfo {
    /// Has a `src` attribute
    pub external: bool,
    /// Has a `defer` or `async` attribute
    pub deferred: bool,
}

/// Everything the SEO checks read from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Text of the `<title>` element; `None` when the element is absent
    pub title: Option<String>,
    /// Meta tag content keyed by the tag's `name` (or `property` when unnamed)
    pub meta: HashMap<String, String>,
    /// Raw text of each JSON-LD payload, parsed lazily by the audit
    pub structured_data: Vec<String>,
    /// One entry per `<img>`, in document order
    pub images: Vec<ImageInfo>,
    /// Heading levels (1-6) in document order
    pub headings: Vec<u8>,
    /// One entry per `<a>`, in document order
    pub links: Vec<LinkInfo>,
    /// One entry per `<script>`, JSON-LD included
    pub scripts: Vec<ScriptInfo>,
}

impl DocumentSnapshot {
    /// Returns the content of a meta tag when it is present and non-empty.
    pub fn meta_content(&self, name: &str) -> Option<&str> {
        self.meta
            .get(name)
            .map(String::as_str)
            .filter(|content| !content.is_empty())
    }

    /// Number of `<h1>` elements.
    pub fn h1_count(&self) -> usize {
        self.headings.iter().filter(|&&level| level == 1).count()
    }
}
