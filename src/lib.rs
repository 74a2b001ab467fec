//! bingrab - bulk image downloader for Bing image search
//!
//! This library scrapes the Bing image search results endpoint, extracts
//! direct image URLs from the embedded markup, and downloads a bounded
//! number of images to local storage.
//!
//! # Features
//!
//! - Paginated link discovery with cross-page deduplication
//! - Excluded-site filtering by URL substring
//! - Magic-byte validation of downloaded payloads
//! - Bounded concurrent downloads with dense sequence-numbered filenames
//! - Cooperative cancellation between requests
//!
//! # Example
//!
//! ```no_run
//! use bingrab::{Config, SearchClient, LinkDiscoverer, DownloadPipeline};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.search.query = "cats".to_string();
//!     config.search.limit = 10;
//!
//!     let client = SearchClient::new(&config)?;
//!     let token = CancellationToken::new();
//!     let mut discoverer = LinkDiscoverer::new(&client, &config, token.clone());
//!     let image_dir = config.image_dir();
//!     std::fs::create_dir_all(&image_dir)?;
//!
//!     let pipeline = DownloadPipeline::new(&client, &config, image_dir, token);
//!     let state = pipeline.run(&mut discoverer).await?;
//!     println!("downloaded {} images", state.accepted);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod search;

// Re-exports for convenience
pub use config::{AdultFilter, Config, StyleFilter};
pub use download::{DownloadPipeline, RunState};
pub use error::{Error, Result};
pub use search::{LinkDiscoverer, SearchClient};
