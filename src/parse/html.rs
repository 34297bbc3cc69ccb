//! Document snapshot extraction.
//!
//! Reads the elements the SEO checklist inspects out of a parsed HTML
//! document using CSS selectors.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::parse::structured::is_json_ld_type;
use crate::snapshot::{DocumentSnapshot, ImageInfo, LinkInfo, ScriptInfo};
use crate::utils::parse_selector_unsafe;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_SELECTOR_STR: &str = "meta";
const SCRIPT_SELECTOR_STR: &str = "script";
const IMAGE_SELECTOR_STR: &str = "img";
const HEADING_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";
const ANCHOR_SELECTOR_STR: &str = "a";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_SELECTOR_STR, "META_SELECTOR"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));
static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(HEADING_SELECTOR_STR, "HEADING_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Parses HTML text and extracts a [`DocumentSnapshot`].
///
/// # Arguments
///
/// * `html` - The raw HTML content
pub fn extract_snapshot(html: &str) -> DocumentSnapshot {
    let document = Html::parse_document(html);
    snapshot_from_document(&document)
}

/// Extracts a [`DocumentSnapshot`] from an already parsed document.
pub fn snapshot_from_document(document: &Html) -> DocumentSnapshot {
    let snapshot = DocumentSnapshot {
        title: extract_title(document),
        meta: extract_meta_tags(document),
        structured_data: extract_json_ld_payloads(document),
        images: document.select(&IMAGE_SELECTOR).map(image_info).collect(),
        headings: document
            .select(&HEADING_SELECTOR)
            .filter_map(heading_level)
            .collect(),
        links: document
            .select(&ANCHOR_SELECTOR)
            .map(|element| LinkInfo {
                href: element.value().attr("href").map(str::to_string),
                rel: element.value().attr("rel").map(str::to_string),
            })
            .collect(),
        scripts: document
            .select(&SCRIPT_SELECTOR)
            .map(|element| {
                let attrs = element.value();
                ScriptInfo {
                    external: attrs.attr("src").is_some(),
                    deferred: attrs.attr("defer").is_some() || attrs.attr("async").is_some(),
                }
            })
            .collect(),
    };

    debug!(
        "Extracted snapshot: title={:?}, {} meta tags, {} JSON-LD payloads, {} images, {} headings, {} links, {} scripts",
        snapshot.title,
        snapshot.meta.len(),
        snapshot.structured_data.len(),
        snapshot.images.len(),
        snapshot.headings.len(),
        snapshot.links.len(),
        snapshot.scripts.len()
    );
    snapshot
}

/// Raw text of the first `<title>` element, surrounding whitespace included.
/// `None` when there is no element; an empty element yields `Some("")`.
fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Maps each `<meta>` tag's `name` (or `property` when `name` is missing or
/// empty) to its `content`. Later duplicates overwrite earlier ones.
fn extract_meta_tags(document: &Html) -> HashMap<String, String> {
    let mut meta = HashMap::new();
    for element in document.select(&META_SELECTOR) {
        let attrs = element.value();
        let key = non_empty_attr(element, "name").or_else(|| non_empty_attr(element, "property"));
        if let Some(key) = key {
            let content = attrs.attr("content").unwrap_or_default();
            meta.insert(key.to_string(), content.to_string());
        }
    }
    meta
}

fn extract_json_ld_payloads(document: &Html) -> Vec<String> {
    document
        .select(&SCRIPT_SELECTOR)
        .filter(|element| element.value().attr("type").is_some_and(is_json_ld_type))
        .map(|element| element.text().collect::<String>())
        .collect()
}

fn image_info(element: ElementRef<'_>) -> ImageInfo {
    ImageInfo {
        has_alt: non_empty_attr(element, "alt").is_some(),
        has_width: non_empty_attr(element, "width").is_some(),
        has_height: non_empty_attr(element, "height").is_some(),
        lazy: element
            .value()
            .attr("loading")
            .is_some_and(|loading| loading == "lazy"),
    }
}

fn heading_level(element: ElementRef<'_>) -> Option<u8> {
    element
        .value()
        .name()
        .strip_prefix('h')
        .and_then(|level| level.parse().ok())
}

fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|value| !value.is_empty())
}
