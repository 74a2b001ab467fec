//! Bounded concurrent download pipeline.
//!
//! Consumes URLs from a [`LinkDiscoverer`], fetches each image over its
//! own request, validates the payload by signature, and writes it under a
//! dense sequence-numbered filename. Per-URL failures are logged and
//! skipped; filesystem failures abort the run.

use std::path::PathBuf;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::download::state::RunState;
use crate::download::validate::validate_image;
use crate::error::Result;
use crate::fs::naming::{build_filename, infer_extension};
use crate::fs::paths::write_atomic;
use crate::search::client::SearchClient;
use crate::search::discovery::LinkDiscoverer;

/// Callback invoked with the new accepted count after each successful write.
pub type ProgressObserver = Box<dyn Fn(usize) + Send + Sync>;

/// A fetched, signature-validated image ready to be written.
struct FetchedImage {
    url: String,
    extension: String,
    bytes: Vec<u8>,
}

pub struct DownloadPipeline<'a> {
    client: &'a SearchClient,
    dest_dir: PathBuf,
    image_name: String,
    limit: usize,
    concurrency: usize,
    cancel: CancellationToken,
    observer: Option<ProgressObserver>,
}

impl<'a> DownloadPipeline<'a> {
    /// Create a pipeline writing into `dest_dir`. The directory must
    /// already exist; creating it is the caller's responsibility.
    pub fn new(
        client: &'a SearchClient,
        config: &Config,
        dest_dir: PathBuf,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            dest_dir,
            image_name: config.download.image_name.clone(),
            limit: config.search.limit,
            concurrency: config.download.concurrency.max(1),
            cancel,
            observer: None,
        }
    }

    /// Attach a progress observer.
    pub fn with_observer(mut self, observer: ProgressObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run the pipeline until `limit` images are written, discovery is
    /// exhausted, or the run is cancelled. Returns the accumulated counters
    /// in every case; ending short of the limit is not an error.
    ///
    /// Fetches fan out across at most `concurrency` in-flight requests, but
    /// the in-flight count never exceeds the remaining need, so successes
    /// can never exceed the limit. Writes happen one at a time in this
    /// loop, which makes the increment-and-name step atomic. With
    /// concurrency above 1, completion order (and therefore sequence
    /// numbers) may diverge from discovery order.
    pub async fn run(&self, discoverer: &mut LinkDiscoverer<'_>) -> Result<RunState> {
        let mut state = RunState::new(self.limit);
        let mut in_flight = FuturesUnordered::new();
        let mut discovery_done = false;

        loop {
            // The in-flight window is bounded by both the concurrency cap
            // and the remaining need, so successes can never pass the limit.
            let want_more = !discovery_done
                && !self.cancel.is_cancelled()
                && in_flight.len() < self.concurrency
                && state.accepted + in_flight.len() < state.limit;

            if !want_more {
                // Window full, limit reached, or discovery over: drain.
                let Some(result) = in_flight.next().await else {
                    break;
                };
                self.handle_result(&mut state, result).await?;
                continue;
            }

            if in_flight.is_empty() {
                match discoverer.next().await {
                    Some(url) => self.start_fetch(&mut state, &mut in_flight, url),
                    None => discovery_done = true,
                }
                continue;
            }

            // Keep in-flight fetches progressing while the next page loads.
            // A discovery poll dropped here is safe to restart: it refetches
            // the same page offset.
            tokio::select! {
                biased;
                Some(result) = in_flight.next() => {
                    self.handle_result(&mut state, result).await?;
                }
                next_url = discoverer.next() => {
                    match next_url {
                        Some(url) => self.start_fetch(&mut state, &mut in_flight, url),
                        None => discovery_done = true,
                    }
                }
            }
        }

        tracing::info!("Done. Downloaded {} images.", state.accepted);
        Ok(state)
    }

    /// Record and start one download attempt.
    fn start_fetch<'f>(
        &'f self,
        state: &mut RunState,
        in_flight: &mut FuturesUnordered<BoxFuture<'f, Result<FetchedImage>>>,
        url: String,
    ) {
        state.record_attempt();
        tracing::info!("Downloading image #{} from {}", state.attempted, url);
        in_flight.push(Box::pin(self.fetch_and_validate(url)));
    }

    /// Apply one completed fetch: write on success, log and continue on
    /// recoverable failure, abort the run otherwise.
    async fn handle_result(&self, state: &mut RunState, result: Result<FetchedImage>) -> Result<()> {
        match result {
            Ok(image) => {
                if state.accepted < state.limit {
                    self.write_image(state, &image).await?;
                }
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                tracing::error!("Issue getting image: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch one URL and validate its payload. Errors returned here are
    /// recoverable per-URL failures.
    async fn fetch_and_validate(&self, url: String) -> Result<FetchedImage> {
        let extension = infer_extension(&url);
        let bytes = self.client.fetch_image(&url).await?;
        validate_image(&url, &bytes)?;

        Ok(FetchedImage {
            url,
            extension,
            bytes,
        })
    }

    /// Assign the next sequence number and persist the image. The payload
    /// is already fully validated in memory, and the write goes through a
    /// temp path, so no partial file is ever left behind.
    async fn write_image(&self, state: &mut RunState, image: &FetchedImage) -> Result<()> {
        let sequence = state.accepted + 1;
        let filename = build_filename(&self.image_name, sequence, &image.extension);
        let path = self.dest_dir.join(filename);

        write_atomic(&path, &image.bytes).await?;
        state.record_success();

        tracing::info!("Saved {} from {}", path.display(), image.url);

        if let Some(observer) = &self.observer {
            observer(state.accepted);
        }

        Ok(())
    }
}
