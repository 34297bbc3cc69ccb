//! Loading the HTML document to audit.
//!
//! A source is stdin (`-`), an `http`/`https` URL, or a filesystem path.

use std::fmt;
use std::path::PathBuf;

use log::{debug, info};
use tokio::io::AsyncReadExt;
use url::Url;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::LoadError;

/// Where the HTML document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// `-`
    Stdin,
    /// An `http` or `https` URL
    Url(Url),
    /// Anything else
    File(PathBuf),
}

impl Source {
    /// Classifies a CLI source argument.
    ///
    /// Only `http` and `https` URLs are fetched; anything else that is not
    /// `-` is treated as a path.
    pub fn parse(raw: &str) -> Self {
        if raw == "-" {
            return Source::Stdin;
        }
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Url(url),
            _ => Source::File(PathBuf::from(raw)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("stdin"),
            Source::Url(url) => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the document behind `source`.
///
/// Documents larger than `MAX_RESPONSE_BODY_SIZE` are rejected. Non-UTF-8
/// bytes are replaced rather than failing the load.
///
/// # Errors
///
/// Returns `LoadError` when reading or fetching fails, the server answers
/// with a non-success status, or the document is too large.
pub async fn load_html(source: &Source, client: &reqwest::Client) -> Result<String, LoadError> {
    let bytes = match source {
        Source::Stdin => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .map_err(|e| io_error(source, e))?;
            buf
        }
        Source::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| io_error(source, e))?,
        Source::Url(url) => fetch(url, client).await?,
    };

    check_size(bytes.len())?;
    info!("Loaded {} bytes from {}", bytes.len(), source);
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn fetch(url: &Url, client: &reqwest::Client) -> Result<Vec<u8>, LoadError> {
    debug!("Fetching {url}");
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        });
    }
    if response.url() != url {
        debug!("Redirected from {} to {}", url, response.url());
    }
    if let Some(length) = response.content_length() {
        check_size(usize::try_from(length).unwrap_or(usize::MAX))?;
    }

    Ok(response.bytes().await?.to_vec())
}

fn check_size(size: usize) -> Result<(), LoadError> {
    if size > MAX_RESPONSE_BODY_SIZE {
        return Err(LoadError::TooLarge {
            size,
            limit: MAX_RESPONSE_BODY_SIZE,
        });
    }
    Ok(())
}

fn io_error(source: &Source, error: std::io::Error) -> LoadError {
    LoadError::Io {
        source_name: source.to_string(),
        source: error,
    }
}
