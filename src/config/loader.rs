//! Configuration structures and loading logic.

use crate::config::filters::AdultFilter;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub download: DownloadConfig,
}

/// Search query configuration. Immutable for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search query text.
    #[serde(default)]
    pub query: String,

    /// Maximum number of images to download.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Adult content filter.
    #[serde(default)]
    pub adult_filter: AdultFilter,

    /// Style filter shorthand (line, photo, clipart, gif, transparent).
    /// Unrecognized values are sent without a style fragment.
    #[serde(default)]
    pub style: Option<String>,

    /// URL substrings to exclude from results (case-sensitive).
    #[serde(default)]
    pub bad_sites: Vec<String>,
}

/// Download behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Base directory for downloads. Images land in `<output_dir>/<query>/`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Base name for downloaded files: `<image_name>_<n>.<ext>`.
    #[serde(default = "default_image_name")]
    pub image_name: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of image fetches in flight at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Delete and recreate the image directory before downloading.
    #[serde(default)]
    pub force_replace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            query: String::new(),
            limit: default_limit(),
            adult_filter: AdultFilter::default(),
            style: None,
            bad_sites: Vec::new(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            image_name: default_image_name(),
            timeout_seconds: default_timeout(),
            concurrency: default_concurrency(),
            force_replace: false,
        }
    }
}

fn default_limit() -> usize {
    100
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dataset")
}

fn default_image_name() -> String {
    "Image".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_concurrency() -> usize {
    4
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The per-query directory images are written into.
    pub fn image_dir(&self) -> PathBuf {
        self.download.output_dir.join(&self.search.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.limit, 100);
        assert_eq!(config.download.output_dir, PathBuf::from("dataset"));
        assert_eq!(config.download.image_name, "Image");
        assert_eq!(config.download.timeout_seconds, 60);
        assert_eq!(config.download.concurrency, 4);
        assert!(!config.download.force_replace);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [search]
            query = "red pandas"
            limit = 25
            adult_filter = "off"
            style = "photo"
            bad_sites = ["shutterstock", "gettyimages"]

            [download]
            output_dir = "images"
            image_name = "panda"
            timeout_seconds = 30
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.search.query, "red pandas");
        assert_eq!(config.search.limit, 25);
        assert_eq!(config.search.adult_filter, crate::config::AdultFilter::Off);
        assert_eq!(config.search.style.as_deref(), Some("photo"));
        assert_eq!(config.search.bad_sites.len(), 2);
        assert_eq!(config.download.timeout_seconds, 30);
        // Unset fields fall back to defaults
        assert_eq!(config.download.concurrency, 4);
    }

    #[test]
    fn test_image_dir_is_per_query() {
        let mut config = Config::default();
        config.search.query = "cats".to_string();
        config.download.output_dir = PathBuf::from("/tmp/downloads");
        assert_eq!(config.image_dir(), PathBuf::from("/tmp/downloads/cats"));
    }
}
