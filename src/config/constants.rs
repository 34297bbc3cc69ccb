//! Configuration constants.
//!
//! Defaults for the reference deployment's SEO checklist and the limits used
//! when loading documents.

/// Site name used in report headers when no configuration overrides it.
pub const DEFAULT_SITE_NAME: &str = "Kids Center Costa Rica";

/// Minimum recommended title length in characters (inclusive).
pub const DEFAULT_MIN_TITLE_LENGTH: usize = 30;
/// Maximum recommended title length in characters (inclusive).
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 60;

/// Minimum recommended meta description length in characters (inclusive).
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 120;
/// Maximum recommended meta description length in characters (inclusive).
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 160;

/// Meta tags every page is expected to carry, keyed by `name` or `property`.
pub const DEFAULT_REQUIRED_META_TAGS: &[&str] = &[
    "description",
    "keywords",
    "author",
    "robots",
    "viewport",
    "og:title",
    "og:description",
    "og:image",
    "twitter:card",
];

/// Schema.org types expected among the page's JSON-LD payloads.
pub const DEFAULT_STRUCTURED_DATA_TYPES: &[&str] = &[
    "LocalBusiness",
    "FAQPage",
    "BreadcrumbList",
    "WebSite",
    "Review",
    "Course",
];

/// Number of characters of an external href shown in a finding message.
pub const MAX_HREF_PREVIEW_CHARS: usize = 50;

/// HTTP request timeout in seconds when auditing a URL.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger documents are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Exit code when the audit score falls below `--fail-under`.
pub const EXIT_CODE_SCORE_BELOW_THRESHOLD: i32 = 2;
