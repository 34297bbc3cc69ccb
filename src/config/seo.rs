//! SEO checklist configuration.
//!
//! `SeoConfig` is the fixed record of thresholds and expectations the auditor
//! measures a document against. It is an in-memory value; a JSON file may
//! supply any subset of its fields, the rest fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MAX_TITLE_LENGTH, DEFAULT_MIN_DESCRIPTION_LENGTH,
    DEFAULT_MIN_TITLE_LENGTH, DEFAULT_REQUIRED_META_TAGS, DEFAULT_SITE_NAME,
    DEFAULT_STRUCTURED_DATA_TYPES,
};
use crate::error_handling::ConfigError;

/// Thresholds and expectations for an SEO audit.
///
/// # Examples
///
/// ```
/// use seo_monitor::SeoConfig;
///
/// let config = SeoConfig {
///     min_title_length: 10,
///     required_meta_tags: vec!["description".to_string()],
///     ..Default::default()
/// };
/// assert_eq!(config.max_title_length, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoConfig {
    /// Site name shown in report headers
    pub site_name: String,
    /// Minimum recommended title length (inclusive)
    pub min_title_length: usize,
    /// Maximum recommended title length (inclusive)
    pub max_title_length: usize,
    /// Minimum recommended meta description length (inclusive)
    pub min_description_length: usize,
    /// Maximum recommended meta description length (inclusive)
    pub max_description_length: usize,
    /// Meta tag names (or properties) that must be present, in check order
    pub required_meta_tags: Vec<String>,
    /// Schema.org `@type` values expected among JSON-LD payloads, in check order
    pub structured_data_types: Vec<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            min_title_length: DEFAULT_MIN_TITLE_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            required_meta_tags: DEFAULT_REQUIRED_META_TAGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            structured_data_types: DEFAULT_STRUCTURED_DATA_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SeoConfig {
    /// Parses a configuration from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON and
    /// `ConfigError::InvalidBounds` when a minimum exceeds its maximum.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SeoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, otherwise the
    /// errors of [`SeoConfig::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        log::debug!("Loaded SEO configuration from {}", path.display());
        Ok(config)
    }

    /// Checks that every length bound pair is ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_title_length > self.max_title_length {
            return Err(ConfigError::InvalidBounds {
                field: "title",
                min: self.min_title_length,
                max: self.max_title_length,
            });
        }
        if self.min_description_length > self.max_description_length {
            return Err(ConfigError::InvalidBounds {
                field: "description",
                min: self.min_description_length,
                max: self.max_description_length,
            });
        }
        Ok(())
    }
}
