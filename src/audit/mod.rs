//! SEO audit over a document snapshot.
//!
//! The checklist is a fixed sequence of independent rules. Each rule is a pure
//! function from `(snapshot, config)` to the findings it produces; the
//! auditor runs them in order and folds their output into a [`Report`].
//!
//! No rule can fail: absent elements and malformed payloads become findings.

mod checks;

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::SeoConfig;
use crate::report::{Finding, Report};
use crate::snapshot::DocumentSnapshot;

pub use checks::{
    check_description_length, check_headings, check_images, check_links, check_meta_tags,
    check_performance, check_structured_data, check_title,
};

/// One rule of the SEO checklist, in execution order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter, Display, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Check {
    /// Title presence and length
    Title,
    /// Presence of every required meta tag
    MetaTags,
    /// Meta description length
    DescriptionLength,
    /// JSON-LD validity and expected Schema.org types
    StructuredData,
    /// Image alt text and dimensions
    Images,
    /// H1 uniqueness and heading presence
    Headings,
    /// External link `rel`, broken anchors, link count
    Links,
    /// Lazy-loaded images and deferred scripts
    Performance,
}

impl Check {
    /// Runs this rule against a snapshot.
    pub fn evaluate(self, document: &DocumentSnapshot, config: &SeoConfig) -> Vec<Finding> {
        match self {
            Check::Title => check_title(document, config),
            Check::MetaTags => check_meta_tags(document, config),
            Check::DescriptionLength => check_description_length(document, config),
            Check::StructuredData => check_structured_data(document, config),
            Check::Images => check_images(document),
            Check::Headings => check_headings(document),
            Check::Links => check_links(document),
            Check::Performance => check_performance(document),
        }
    }
}

/// Runs a set of checks with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Auditor {
    config: SeoConfig,
    checks: Vec<Check>,
}

impl Auditor {
    /// Auditor running the full checklist.
    pub fn new(config: SeoConfig) -> Self {
        Self {
            config,
            checks: Check::iter().collect(),
        }
    }

    /// Auditor running only `checks`. Duplicates are dropped and the checks
    /// always run in checklist order, whatever order they are given in.
    pub fn with_checks(config: SeoConfig, checks: impl IntoIterator<Item = Check>) -> Self {
        let mut checks: Vec<Check> = checks.into_iter().collect();
        checks.sort();
        checks.dedup();
        Self { config, checks }
    }

    /// Configuration the checks run with.
    pub fn config(&self) -> &SeoConfig {
        &self.config
    }

    /// Checks this auditor runs, in execution order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Audits a snapshot and returns a fresh report.
    pub fn audit(&self, document: &DocumentSnapshot) -> Report {
        let findings = self.checks.iter().flat_map(|&check| {
            let findings = check.evaluate(document, &self.config);
            debug!("Check {} produced {} findings", check, findings.len());
            findings
        });
        Report::from_findings(findings)
    }
}

/// Audits `document` against `config` with the full checklist.
///
/// # Examples
///
/// ```
/// use seo_monitor::{audit, extract_snapshot, SeoConfig};
///
/// let snapshot = extract_snapshot("<html><head><title>Hi</title></head></html>");
/// let report = audit(&snapshot, &SeoConfig::default());
/// assert!(report.score() < 50);
/// ```
pub fn audit(document: &DocumentSnapshot, config: &SeoConfig) -> Report {
    Auditor::new(config.clone()).audit(document)
}
