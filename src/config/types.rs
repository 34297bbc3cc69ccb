//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::audit::Check;
use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped, colored checklist
    Plain,
    /// Pretty-printed JSON report
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Audit a local build
/// seo_monitor dist/index.html
///
/// # Audit a live page and fail CI below 85
/// seo_monitor https://example.com --fail-under 85
///
/// # Custom checklist, JSON output
/// seo_monitor dist/index.html --config seo.json --format json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_monitor",
    about = "Audits a web page against an SEO checklist and scores the result."
)]
pub struct Opt {
    /// HTML source: a file path, an http(s) URL, or `-` for stdin
    #[arg(value_parser)]
    pub source: String,

    /// JSON file with checklist thresholds (missing fields use defaults)
    #[arg(long, value_parser)]
    pub config: Option<PathBuf>,

    /// Site name shown in the report header (overrides the config file)
    #[arg(long)]
    pub site_name: Option<String>,

    /// Run only these checks (repeatable); all checks run when omitted
    #[arg(long = "only", value_enum)]
    pub only: Vec<Check>,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Exit with code 2 when the score is below this value (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,

    /// Per-request timeout in seconds when the source is a URL
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
