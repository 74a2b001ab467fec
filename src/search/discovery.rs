//! Paginated link discovery.
//!
//! [`LinkDiscoverer`] owns the paging loop against the search endpoint and
//! produces a lazy, finite, non-restartable sequence of accepted URLs.
//! Discovery is strictly sequential: it depends on a monotonically
//! advancing page cursor and a shared dedup set.

use std::collections::{HashSet, VecDeque};

use tokio_util::sync::CancellationToken;

use crate::config::filters::style_fragment;
use crate::config::Config;
use crate::search::client::SearchClient;
use crate::search::extract::image_urls;

/// Result page size requested per fetch; the page cursor advances by
/// this amount after each page.
pub const PAGE_SIZE: usize = 35;

/// Consecutive pages yielding no new URLs before discovery gives up.
/// Guards against endless paging when the upstream markup changes.
const MAX_STALE_PAGES: u32 = 3;

/// Pull-based producer of accepted image URLs.
///
/// Terminal states are sticky: once `next()` returns `None` it returns
/// `None` forever. A transport error on a page fetch is a soft stop, not
/// an error — the sequence simply ends with whatever was already yielded.
pub struct LinkDiscoverer<'a> {
    client: &'a SearchClient,
    query: String,
    adult: &'static str,
    style_fragment: &'static str,
    bad_sites: Vec<String>,

    cursor: usize,
    page_count: u32,
    stale_pages: u32,
    seen: HashSet<String>,
    buffer: VecDeque<String>,
    exhausted: bool,
    cancel: CancellationToken,
}

impl<'a> LinkDiscoverer<'a> {
    pub fn new(client: &'a SearchClient, config: &Config, cancel: CancellationToken) -> Self {
        if !config.search.bad_sites.is_empty() {
            tracing::info!(
                "Download links will not include: {}",
                config.search.bad_sites.join(", ")
            );
        }

        Self {
            client,
            query: config.search.query.clone(),
            adult: config.search.adult_filter.as_param(),
            style_fragment: style_fragment(config.search.style.as_deref()),
            bad_sites: config.search.bad_sites.clone(),
            cursor: 0,
            page_count: 0,
            stale_pages: 0,
            seen: HashSet::new(),
            buffer: VecDeque::new(),
            exhausted: false,
            cancel,
        }
    }

    /// Yield the next accepted URL, fetching further pages on demand.
    /// `None` means the sequence is exhausted.
    pub async fn next(&mut self) -> Option<String> {
        loop {
            if let Some(url) = self.buffer.pop_front() {
                return Some(url);
            }

            if self.exhausted {
                return None;
            }

            if self.cancel.is_cancelled() {
                tracing::info!("Discovery cancelled after {} pages", self.page_count);
                self.exhausted = true;
                return None;
            }

            self.fetch_next_page().await;
        }
    }

    /// Fetch one page, extract and filter its URLs into the buffer, and
    /// advance the cursor. Sets the exhausted flag on empty body, repeated
    /// stale pages, or transport failure.
    ///
    /// No state changes happen before the fetch completes, so a poll
    /// dropped mid-request can be restarted and refetches the same offset.
    async fn fetch_next_page(&mut self) {
        let body = match self
            .client
            .fetch_page(
                &self.query,
                self.cursor,
                PAGE_SIZE,
                self.adult,
                self.style_fragment,
            )
            .await
        {
            Ok(body) => body,
            Err(e) => {
                // Soft stop: one bad page ends discovery rather than
                // retrying indefinitely.
                tracing::error!("Error while requesting results page: {}", e);
                self.exhausted = true;
                return;
            }
        };

        self.page_count += 1;

        if body.is_empty() {
            tracing::info!("No more images are available");
            self.exhausted = true;
            return;
        }

        let links = image_urls(&body);
        tracing::info!(
            "Indexed {} images on page {}",
            links.len(),
            self.page_count
        );

        let mut accepted = 0usize;
        for link in links {
            if let Some(bad) = self.bad_sites.iter().find(|bad| link.contains(bad.as_str())) {
                tracing::info!("Excluded link matching '{}': {}", bad, link);
                continue;
            }

            if self.seen.insert(link.clone()) {
                self.buffer.push_back(link);
                accepted += 1;
            }
        }

        if accepted == 0 {
            self.stale_pages += 1;
            if self.stale_pages >= MAX_STALE_PAGES {
                tracing::info!(
                    "No new images after {} consecutive pages, stopping",
                    self.stale_pages
                );
                self.exhausted = true;
            }
        } else {
            self.stale_pages = 0;
        }

        self.cursor += PAGE_SIZE;
    }
}
