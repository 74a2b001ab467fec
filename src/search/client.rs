//! HTTP client for the search endpoint and image hosts.

use std::time::Duration;

use reqwest::{header, Client};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Default search endpoint base URL.
const DEFAULT_BASE_URL: &str = "https://www.bing.com";

/// Browser user agent. The endpoint rejects unidentified clients.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
     AppleWebKit/537.11 (KHTML, like Gecko) \
     Chrome/23.0.1271.64 Safari/537.11";

/// HTTP client with browser-like headers shared by page and image requests.
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    /// Create a new client with the configured request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US,en;q=0.8"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.download.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the search endpoint base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the results page URL for one page of the query.
    ///
    /// The query text is form-encoded; the `qft` fragment is appended
    /// verbatim since Bing expects its `+` and `:` characters literally.
    pub fn page_url(
        &self,
        query: &str,
        offset: usize,
        count: usize,
        adult: &str,
        style_fragment: &str,
    ) -> Result<Url> {
        let encoded_query: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();

        let raw = format!(
            "{}/images/async?q={}&first={}&count={}&adlt={}&qft={}",
            self.base_url, encoded_query, offset, count, adult, style_fragment
        );

        Ok(Url::parse(&raw)?)
    }

    /// Fetch one results page and return its body text.
    pub async fn fetch_page(
        &self,
        query: &str,
        offset: usize,
        count: usize,
        adult: &str,
        style_fragment: &str,
    ) -> Result<String> {
        let url = self.page_url(query, offset, count, adult, style_fragment)?;

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Search(format!("Results page returned HTTP {}", status)));
        }

        Ok(response.text().await?)
    }

    /// Fetch raw image bytes from an extracted URL.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!("{} returned HTTP {}", url, status)));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SearchClient {
        SearchClient::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_page_url_encodes_query() {
        let client = test_client();
        let url = client.page_url("red pandas", 0, 35, "on", "").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.bing.com/images/async?q=red+pandas&first=0&count=35&adlt=on&qft="
        );
    }

    #[test]
    fn test_page_url_keeps_style_fragment_verbatim() {
        let client = test_client();
        let url = client
            .page_url("cats", 35, 35, "off", "+filterui:photo-photo")
            .unwrap();
        assert!(url
            .as_str()
            .ends_with("first=35&count=35&adlt=off&qft=+filterui:photo-photo"));
    }

    #[test]
    fn test_base_url_override() {
        let client = test_client().with_base_url("http://127.0.0.1:9999");
        let url = client.page_url("cats", 0, 35, "on", "").unwrap();
        assert!(url.as_str().starts_with("http://127.0.0.1:9999/images/async?"));
    }
}
