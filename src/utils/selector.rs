//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses one of the crate's static CSS selectors.
///
/// The selectors are string constants, so a parse failure is a programming
/// error and panics with `context` naming the offending static.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!("Failed to parse CSS selector '{selector_str}' in {context}: {e}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_unsafe_valid() {
        let selector = parse_selector_unsafe("h1, h2", "heading test");
        let document = scraper::Html::parse_fragment("<h1>a</h1><p>b</p><h2>c</h2>");
        assert_eq!(document.select(&selector).count(), 2);
    }

    #[test]
    #[should_panic(expected = "Failed to parse CSS selector")]
    fn test_parse_selector_unsafe_invalid_panics() {
        parse_selector_unsafe("[[", "invalid test");
    }
}
