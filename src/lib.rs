//! seo_monitor library: SEO checklist auditing for web pages
//!
//! This library inspects an HTML document against a fixed SEO checklist
//! (title, meta tags, structured data, images, headings, links, performance
//! hints) and scores the result from 0 to 100.
//!
//! # Example
//!
//! ```
//! use seo_monitor::{audit, extract_snapshot, SeoConfig};
//!
//! let html = r#"<html><head><title>Kids Center Costa Rica - Bilingual Preschool</title></head>
//!     <body><h1>Welcome</h1></body></html>"#;
//! let snapshot = extract_snapshot(html);
//! let report = audit(&snapshot, &SeoConfig::default());
//! println!("Score: {}/100, {} errors", report.score(), report.errors().len());
//! ```
//!
//! The auditor is pure: it performs no I/O and returns a fresh [`Report`]
//! on every call. Loading documents from files or URLs is handled by
//! [`run_audit`], which requires a Tokio runtime.

#![warn(missing_docs)]

pub mod audit;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod parse;
pub mod present;
pub mod report;
pub mod snapshot;
pub mod source;
mod utils;

// Re-export public API
pub use audit::{audit, Auditor, Check};
pub use config::{LogFormat, LogLevel, Opt, OutputFormat, SeoConfig};
pub use error_handling::{ConfigError, InitializationError, LoadError};
pub use parse::extract_snapshot;
pub use report::{exit_code_for, Finding, Report, Severity};
pub use run::{run_audit, AuditOutcome};
pub use snapshot::{DocumentSnapshot, ImageInfo, LinkInfo, ScriptInfo};
pub use source::Source;

/// Parses `html` and audits it with the full checklist.
pub fn audit_html(html: &str, config: &SeoConfig) -> Report {
    audit(&extract_snapshot(html), config)
}

// Internal run module (wires loading, auditing, and configuration together)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::audit::Auditor;
    use crate::config::{Opt, SeoConfig};
    use crate::initialization::init_client;
    use crate::parse::extract_snapshot;
    use crate::report::Report;
    use crate::source::{load_html, Source};

    /// Result of auditing one source.
    #[derive(Debug, Clone)]
    pub struct AuditOutcome {
        /// The audited source, as given on the command line
        pub source: String,
        /// Site name from the effective configuration
        pub site_name: String,
        /// The audit report
        pub report: Report,
    }

    /// Loads the configured source and audits it.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The config file cannot be read or is invalid
    /// - The HTTP client cannot be built
    /// - The document cannot be loaded
    pub async fn run_audit(opt: &Opt) -> Result<AuditOutcome> {
        let mut config = match &opt.config {
            Some(path) => SeoConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SeoConfig::default(),
        };
        if let Some(site_name) = &opt.site_name {
            config.site_name = site_name.clone();
        }

        let auditor = if opt.only.is_empty() {
            Auditor::new(config)
        } else {
            Auditor::with_checks(config, opt.only.iter().copied())
        };

        let source = Source::parse(&opt.source);
        let client = init_client(opt.timeout_seconds, &opt.user_agent)
            .context("Failed to initialize HTTP client")?;
        let html = load_html(&source, &client)
            .await
            .with_context(|| format!("Failed to load {source}"))?;

        let snapshot = extract_snapshot(&html);
        let report = auditor.audit(&snapshot);
        info!(
            "Audited {} with {} checks: {} findings",
            source,
            auditor.checks().len(),
            report.total()
        );

        Ok(AuditOutcome {
            source: opt.source.clone(),
            site_name: auditor.config().site_name.clone(),
            report,
        })
    }
}
