//! Configuration validation logic.
//!
//! All checks run before any network activity begins.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::fs::naming::sanitize_filename;

/// Validate the entire configuration.
///
/// The image name may be rewritten: sanitation replaces problematic
/// characters, and the cleaned value is stored back so downloads use it.
pub fn validate_config(config: &mut Config) -> Result<()> {
    validate_query(&config.search.query)?;
    validate_positive("limit", config.search.limit)?;
    validate_positive("timeout_seconds", config.download.timeout_seconds as usize)?;
    validate_positive("concurrency", config.download.concurrency)?;

    // The image name becomes a filename prefix; reject anything that
    // could escape the destination directory.
    config.download.image_name = sanitize_filename(&config.download.image_name)?;

    Ok(())
}

/// Validate the search query text.
fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "query".to_string(),
            message: "Search query cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate that a numeric field is a positive integer.
fn validate_positive(field: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Must be a positive integer".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.search.query = "cats".to_string();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&mut valid_config()).is_ok());
    }

    #[test]
    fn test_empty_query_rejected() {
        let mut config = valid_config();
        config.search.query = "   ".to_string();
        assert!(validate_config(&mut config).is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = valid_config();
        config.search.limit = 0;
        assert!(validate_config(&mut config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.download.timeout_seconds = 0;
        assert!(validate_config(&mut config).is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = valid_config();
        config.download.concurrency = 0;
        assert!(validate_config(&mut config).is_err());
    }

    #[test]
    fn test_traversal_image_name_rejected() {
        let mut config = valid_config();
        config.download.image_name = "../evil".to_string();
        assert!(validate_config(&mut config).is_err());
    }

    #[test]
    fn test_image_name_sanitized_in_place() {
        let mut config = valid_config();
        config.download.image_name = "my:cat?".to_string();
        validate_config(&mut config).unwrap();
        // Downloads must see the cleaned prefix, not the raw input
        assert_eq!(config.download.image_name, "my_cat_");
    }

    #[test]
    fn test_clean_image_name_unchanged() {
        let mut config = valid_config();
        config.download.image_name = "Image".to_string();
        validate_config(&mut config).unwrap();
        assert_eq!(config.download.image_name, "Image");
    }
}
