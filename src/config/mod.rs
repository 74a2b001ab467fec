//! Configuration module for bingrab.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Merging CLI arguments into the configuration
//! - Search filter definitions (adult filter, style filter)
//! - Configuration validation

pub mod filters;
pub mod loader;
pub mod validation;

pub use filters::{AdultFilter, StyleFilter};
pub use loader::{Config, DownloadConfig, SearchConfig};
pub use validation::validate_config;
