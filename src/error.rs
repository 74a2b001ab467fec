//! Error types for the bingrab application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Search endpoint errors (results page fetch)
    #[error("Search request failed: {0}")]
    Search(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Invalid image, not saving {0}")]
    InvalidImage(String),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// True for per-URL failures the pipeline recovers from locally.
    /// Filesystem and configuration errors are never recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Download(_) | Error::InvalidImage(_) | Error::Http(_)
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const SEARCH_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
