//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the HTTP client used to fetch pages for auditing.
///
/// The client follows redirects (reqwest default, up to 10 hops) so that the
/// audited document is the one a browser would end up rendering.
///
/// # Arguments
///
/// * `timeout_seconds` - Whole-request timeout
/// * `user_agent` - User-Agent header value
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(timeout_seconds: u64, user_agent: &str) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()
}
