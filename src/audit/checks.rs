//! The individual checklist rules.
//!
//! Every function here is pure and returns the findings for its rule in the
//! order they are detected.

use std::collections::HashSet;

use crate::audit::Check;
use crate::config::{SeoConfig, MAX_HREF_PREVIEW_CHARS};
use crate::parse::parse_schema_types;
use crate::report::Finding;
use crate::snapshot::DocumentSnapshot;
use crate::utils::sanitize::truncate_chars;

/// Title presence and length within `[min_title_length, max_title_length]`.
pub fn check_title(document: &DocumentSnapshot, config: &SeoConfig) -> Vec<Finding> {
    let Some(title) = document.title.as_deref() else {
        return vec![Finding::error(Check::Title, "Missing title tag")];
    };

    let length = title.chars().count();
    let (min, max) = (config.min_title_length, config.max_title_length);
    if (min..=max).contains(&length) {
        vec![Finding::passed(Check::Title, "Title tag length is optimal")]
    } else {
        vec![Finding::warning(
            Check::Title,
            format!("Title length ({length}) should be between {min}-{max} characters"),
        )]
    }
}

/// One finding per required meta tag: passed when present with content.
pub fn check_meta_tags(document: &DocumentSnapshot, config: &SeoConfig) -> Vec<Finding> {
    config
        .required_meta_tags
        .iter()
        .map(|name| {
            if document.meta_content(name).is_some() {
                Finding::passed(Check::MetaTags, format!("Meta tag \"{name}\" is present"))
            } else {
                Finding::error(
                    Check::MetaTags,
                    format!("Missing required meta tag: {name}"),
                )
            }
        })
        .collect()
}

/// Description length, only when a description exists.
pub fn check_description_length(document: &DocumentSnapshot, config: &SeoConfig) -> Vec<Finding> {
    let Some(description) = document.meta_content("description") else {
        return Vec::new();
    };

    let length = description.chars().count();
    let (min, max) = (config.min_description_length, config.max_description_length);
    if (min..=max).contains(&length) {
        vec![Finding::passed(
            Check::DescriptionLength,
            "Meta description length is optimal",
        )]
    } else {
        vec![Finding::warning(
            Check::DescriptionLength,
            format!("Description length ({length}) should be between {min}-{max} characters"),
        )]
    }
}

/// One error per malformed JSON-LD payload, then one finding per expected
/// Schema.org type.
pub fn check_structured_data(document: &DocumentSnapshot, config: &SeoConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut found_types = HashSet::new();

    for payload in &document.structured_data {
        match parse_schema_types(payload) {
            Ok(types) => found_types.extend(types),
            Err(e) => {
                log::debug!("Skipping malformed JSON-LD payload: {e}");
                findings.push(Finding::error(
                    Check::StructuredData,
                    "Invalid JSON-LD structured data found",
                ));
            }
        }
    }

    for expected in &config.structured_data_types {
        if found_types.contains(expected) {
            findings.push(Finding::passed(
                Check::StructuredData,
                format!("Structured data type \"{expected}\" is present"),
            ));
        } else {
            findings.push(Finding::warning(
                Check::StructuredData,
                format!("Missing structured data type: {expected}"),
            ));
        }
    }

    findings
}

/// Alt text and explicit dimensions across all images.
pub fn check_images(document: &DocumentSnapshot) -> Vec<Finding> {
    let missing_alt = document.images.iter().filter(|img| !img.has_alt).count();
    let missing_dimensions = document
        .images
        .iter()
        .filter(|img| !img.has_dimensions())
        .count();

    let alt = if missing_alt == 0 {
        Finding::passed(Check::Images, "All images have alt attributes")
    } else {
        Finding::warning(
            Check::Images,
            format!("{missing_alt} images missing alt attributes"),
        )
    };
    let dimensions = if missing_dimensions == 0 {
        Finding::passed(Check::Images, "All images have width/height attributes")
    } else {
        Finding::warning(
            Check::Images,
            format!("{missing_dimensions} images missing dimensions (may cause CLS issues)"),
        )
    };
    vec![alt, dimensions]
}

/// Exactly one H1, and at least one heading of any level.
pub fn check_headings(document: &DocumentSnapshot) -> Vec<Finding> {
    let h1_count = document.h1_count();
    let h1 = match h1_count {
        1 => Finding::passed(Check::Headings, "Single H1 tag found (good for SEO)"),
        0 => Finding::error(Check::Headings, "No H1 tag found"),
        n => Finding::warning(Check::Headings, format!("Multiple H1 tags found ({n})")),
    };

    let total = document.headings.len();
    let any = if total > 0 {
        Finding::passed(Check::Headings, format!("{total} header tags found"))
    } else {
        Finding::error(Check::Headings, "No header tags found")
    };
    vec![h1, any]
}

/// External links without `rel="noopener"`, broken anchors, and the link count.
pub fn check_links(document: &DocumentSnapshot) -> Vec<Finding> {
    let mut findings: Vec<Finding> = document
        .links
        .iter()
        .filter(|link| link.is_absolute() && !link.has_rel("noopener"))
        .filter_map(|link| link.href.as_deref())
        .map(|href| {
            Finding::warning(
                Check::Links,
                format!(
                    "External link missing rel=\"noopener\": {}",
                    truncate_chars(href, MAX_HREF_PREVIEW_CHARS)
                ),
            )
        })
        .collect();

    let broken_anchors = document
        .links
        .iter()
        .filter(|link| link.is_broken_anchor())
        .count();

    findings.push(Finding::passed(
        Check::Links,
        format!("{} total links found", document.links.len()),
    ));
    if broken_anchors > 0 {
        findings.push(Finding::warning(
            Check::Links,
            format!("{broken_anchors} broken anchor links found"),
        ));
    }
    findings
}

/// Lazy-loaded images and deferred external scripts.
///
/// Unlike lazy loading, having no deferred scripts produces no finding.
pub fn check_performance(document: &DocumentSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();

    let lazy_images = document.images.iter().filter(|img| img.lazy).count();
    if lazy_images > 0 {
        findings.push(Finding::passed(
            Check::Performance,
            format!("{lazy_images} images use lazy loading"),
        ));
    } else {
        findings.push(Finding::warning(
            Check::Performance,
            "No images using lazy loading",
        ));
    }

    let external: Vec<_> = document
        .scripts
        .iter()
        .filter(|script| script.external)
        .collect();
    let deferred = external.iter().filter(|script| script.deferred).count();
    if deferred > 0 {
        findings.push(Finding::passed(
            Check::Performance,
            format!("{deferred}/{} scripts use defer/async", external.len()),
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::snapshot::{ImageInfo, LinkInfo, ScriptInfo};

    fn config() -> SeoConfig {
        SeoConfig::default()
    }

    fn count(findings: &[Finding], severity: Severity) -> usize {
        findings.iter().filter(|f| f.severity == severity).count()
    }

    fn with_title(title: Option<&str>) -> DocumentSnapshot {
        DocumentSnapshot {
            title: title.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_within_bounds_inclusive() {
        for length in [30, 45, 60] {
            let findings = check_title(&with_title(Some(&"a".repeat(length))), &config());
            assert_eq!(findings.len(), 1);
            assert_eq!(count(&findings, Severity::Passed), 1);
            assert_eq!(findings[0].message, "Title tag length is optimal");
        }
    }

    #[test]
    fn test_title_out_of_bounds() {
        for length in [0, 29, 61] {
            let findings = check_title(&with_title(Some(&"a".repeat(length))), &config());
            assert_eq!(findings.len(), 1);
            assert_eq!(count(&findings, Severity::Warning), 1);
            assert_eq!(
                findings[0].message,
                format!("Title length ({length}) should be between 30-60 characters")
            );
        }
    }

    #[test]
    fn test_title_missing() {
        let findings = check_title(&with_title(None), &config());
        assert_eq!(findings, vec![Finding::error(Check::Title, "Missing title tag")]);
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        let config = SeoConfig {
            min_title_length: 1,
            max_title_length: 5,
            ..Default::default()
        };
        let findings = check_title(&with_title(Some("Niños")), &config);
        assert_eq!(count(&findings, Severity::Passed), 1);
    }

    #[test]
    fn test_meta_tags_presence() {
        let mut document = DocumentSnapshot::default();
        document
            .meta
            .insert("description".to_string(), "d".to_string());
        document.meta.insert("og:title".to_string(), "t".to_string());
        document.meta.insert("robots".to_string(), String::new());
        document.meta.insert("unrelated".to_string(), "x".to_string());

        let findings = check_meta_tags(&document, &config());
        assert_eq!(findings.len(), 9);
        assert_eq!(count(&findings, Severity::Passed), 2);
        assert_eq!(count(&findings, Severity::Error), 7);
        assert_eq!(findings[0].message, "Meta tag \"description\" is present");
        assert_eq!(findings[3].message, "Missing required meta tag: robots");
    }

    #[test]
    fn test_meta_tags_empty_requirement_list() {
        let config = SeoConfig {
            required_meta_tags: Vec::new(),
            ..Default::default()
        };
        assert!(check_meta_tags(&DocumentSnapshot::default(), &config).is_empty());
    }

    #[test]
    fn test_description_length() {
        let mut document = DocumentSnapshot::default();
        assert!(check_description_length(&document, &config()).is_empty());

        document
            .meta
            .insert("description".to_string(), "d".repeat(120));
        let findings = check_description_length(&document, &config());
        assert_eq!(
            findings,
            vec![Finding::passed(
                Check::DescriptionLength,
                "Meta description length is optimal"
            )]
        );

        document
            .meta
            .insert("description".to_string(), "d".repeat(161));
        let findings = check_description_length(&document, &config());
        assert_eq!(
            findings[0].message,
            "Description length (161) should be between 120-160 characters"
        );
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_structured_data_malformed_payloads_do_not_abort() {
        let document = DocumentSnapshot {
            structured_data: vec![
                "{broken".to_string(),
                r#"{"@type": "LocalBusiness"}"#.to_string(),
                "".to_string(),
                r#"[{"@type": "FAQPage"}, {"@type": ["WebSite", "Course"]}]"#.to_string(),
            ],
            ..Default::default()
        };
        let findings = check_structured_data(&document, &config());

        let errors: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|f| f.message == "Invalid JSON-LD structured data found"));
        assert_eq!(count(&findings, Severity::Passed), 4);
        assert_eq!(count(&findings, Severity::Warning), 2);
        assert!(findings
            .iter()
            .any(|f| f.message == "Missing structured data type: BreadcrumbList"));
        assert!(findings
            .iter()
            .any(|f| f.message == "Structured data type \"Course\" is present"));
    }

    #[test]
    fn test_structured_data_null_payload_is_invalid() {
        let document = DocumentSnapshot {
            structured_data: vec!["null".to_string()],
            ..Default::default()
        };
        let findings = check_structured_data(&document, &config());
        assert_eq!(
            findings[0],
            Finding::error(Check::StructuredData, "Invalid JSON-LD structured data found")
        );
        assert_eq!(count(&findings, Severity::Error), 1);
    }

    #[test]
    fn test_structured_data_errors_precede_type_findings() {
        let document = DocumentSnapshot {
            structured_data: vec!["nope".to_string()],
            ..Default::default()
        };
        let findings = check_structured_data(&document, &config());
        assert_eq!(findings.len(), 7);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[1..]
            .iter()
            .all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn test_images_fixture() {
        let document = DocumentSnapshot {
            images: vec![
                ImageInfo {
                    has_width: false,
                    ..ImageInfo::complete()
                },
                ImageInfo {
                    has_alt: false,
                    ..ImageInfo::complete()
                },
                ImageInfo {
                    has_height: false,
                    ..ImageInfo::complete()
                },
            ],
            ..Default::default()
        };

        let findings = check_images(&document);
        assert_eq!(
            findings,
            vec![
                Finding::warning(Check::Images, "1 images missing alt attributes"),
                Finding::warning(
                    Check::Images,
                    "2 images missing dimensions (may cause CLS issues)"
                ),
            ]
        );
    }

    #[test]
    fn test_images_missing_both_dimensions_counts_once() {
        let document = DocumentSnapshot {
            images: vec![ImageInfo {
                has_alt: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let findings = check_images(&document);
        assert_eq!(findings[0].severity, Severity::Passed);
        assert_eq!(
            findings[1].message,
            "1 images missing dimensions (may cause CLS issues)"
        );
    }

    #[test]
    fn test_images_none_passes() {
        let findings = check_images(&DocumentSnapshot::default());
        assert_eq!(count(&findings, Severity::Passed), 2);
    }

    #[test]
    fn test_headings() {
        let single = DocumentSnapshot {
            headings: vec![1, 2, 3],
            ..Default::default()
        };
        let findings = check_headings(&single);
        assert_eq!(findings[0].message, "Single H1 tag found (good for SEO)");
        assert_eq!(findings[1].message, "3 header tags found");
        assert_eq!(count(&findings, Severity::Passed), 2);

        let multiple = DocumentSnapshot {
            headings: vec![1, 1, 2],
            ..Default::default()
        };
        let findings = check_headings(&multiple);
        assert_eq!(
            findings[0],
            Finding::warning(Check::Headings, "Multiple H1 tags found (2)")
        );

        let no_h1 = DocumentSnapshot {
            headings: vec![2, 3],
            ..Default::default()
        };
        let findings = check_headings(&no_h1);
        assert_eq!(findings[0], Finding::error(Check::Headings, "No H1 tag found"));
        assert_eq!(findings[1].severity, Severity::Passed);

        let findings = check_headings(&DocumentSnapshot::default());
        assert_eq!(count(&findings, Severity::Error), 2);
        assert_eq!(findings[1].message, "No header tags found");
    }

    #[test]
    fn test_links() {
        let long_href = format!("https://example.com/{}", "x".repeat(80));
        let document = DocumentSnapshot {
            links: vec![
                LinkInfo::new("https://safe.example.com").with_rel("noopener noreferrer"),
                LinkInfo::new("http://plain.example.com"),
                LinkInfo::new(long_href.clone()).with_rel("nofollow"),
                LinkInfo::new("/internal"),
                LinkInfo::new("#"),
                LinkInfo::default(),
            ],
            ..Default::default()
        };
        let findings = check_links(&document);

        assert_eq!(findings.len(), 4);
        assert_eq!(
            findings[0].message,
            "External link missing rel=\"noopener\": http://plain.example.com"
        );
        assert_eq!(
            findings[1].message,
            format!(
                "External link missing rel=\"noopener\": {}",
                &long_href[..50]
            )
        );
        assert_eq!(
            findings[2],
            Finding::passed(Check::Links, "6 total links found")
        );
        assert_eq!(
            findings[3],
            Finding::warning(Check::Links, "2 broken anchor links found")
        );
    }

    #[test]
    fn test_links_none() {
        let findings = check_links(&DocumentSnapshot::default());
        assert_eq!(
            findings,
            vec![Finding::passed(Check::Links, "0 total links found")]
        );
    }

    #[test]
    fn test_performance_lazy_and_deferred() {
        let document = DocumentSnapshot {
            images: vec![
                ImageInfo::complete(),
                ImageInfo {
                    lazy: false,
                    ..ImageInfo::complete()
                },
            ],
            scripts: vec![
                ScriptInfo {
                    external: true,
                    deferred: true,
                },
                ScriptInfo {
                    external: true,
                    deferred: false,
                },
                ScriptInfo {
                    external: false,
                    deferred: true,
                },
            ],
            ..Default::default()
        };
        let findings = check_performance(&document);
        assert_eq!(
            findings,
            vec![
                Finding::passed(Check::Performance, "1 images use lazy loading"),
                Finding::passed(Check::Performance, "1/2 scripts use defer/async"),
            ]
        );
    }

    #[test]
    fn test_performance_asymmetry() {
        let document = DocumentSnapshot {
            scripts: vec![ScriptInfo {
                external: true,
                deferred: false,
            }],
            ..Default::default()
        };
        let findings = check_performance(&document);
        assert_eq!(
            findings,
            vec![Finding::warning(
                Check::Performance,
                "No images using lazy loading"
            )]
        );
    }
}
