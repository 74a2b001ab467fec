//! Search endpoint client and paginated link discovery.

pub mod client;
pub mod discovery;
pub mod extract;

pub use client::SearchClient;
pub use discovery::{LinkDiscoverer, PAGE_SIZE};
pub use extract::image_urls;
