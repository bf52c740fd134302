// SPDX-License-Identifier: MPL-2.0
//! Collection loader: fetches the metadata page, filters eligible records,
//! and builds the artwork collection according to the configured strategy.
//!
//! # Strategies
//!
//! - **Eager**: every eligible candidate's image is probed concurrently and
//!   the loader joins on all probes before returning. Candidates whose probe
//!   fails are dropped, so the navigator only ever sees artworks with a
//!   confirmed-reachable image. Survivor order matches the input order.
//! - **Lazy**: metadata only; no probes. Entries resolve on demand, one image
//!   fetch in flight at a time. A failed image warm-up is logged and the
//!   entry stays in the collection.
//!
//! A metadata failure aborts the whole load with a discriminated
//! [`LoadError`]; there is no retry and no partial collection.

use crate::artwork::{ArtworkPage, ArtworkRecord, DisplayArtwork};
use crate::collection::Collection;
use crate::config::{Config, LoadStrategy};
use crate::error::LoadError;
use futures_util::future::join_all;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("GalleryLens/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CollectionLoader {
    client: reqwest::Client,
    config: Config,
}

impl CollectionLoader {
    /// Creates a loader with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    pub fn new(config: Config) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn image_base(&self) -> &str {
        &self.config.image_base
    }

    #[must_use]
    pub fn strategy(&self) -> LoadStrategy {
        self.config.strategy
    }

    /// Fetches the metadata page and builds the collection.
    ///
    /// Invoked once per session. A metadata failure aborts the whole load
    /// and leaves the collection empty.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] naming the cause: transport failure,
    /// non-success HTTP status, or malformed payload.
    pub async fn load(&self) -> Result<Collection, LoadError> {
        let page = self.fetch_page().await?;

        let eligible: Vec<ArtworkRecord> = page
            .data
            .into_iter()
            .filter(ArtworkRecord::is_eligible)
            .collect();
        debug!(candidates = eligible.len(), "filtered eligible records");

        match self.config.strategy {
            LoadStrategy::Eager => Ok(self.probe_all(eligible).await),
            LoadStrategy::Lazy => Ok(Collection::from_records(eligible)),
        }
    }

    async fn fetch_page(&self) -> Result<ArtworkPage, LoadError> {
        let url = format!(
            "{}/artworks?page={}&limit={}",
            self.config.api_base,
            self.config.page,
            self.config.clamped_limit()
        );
        debug!(%url, "fetching metadata page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let page: ArtworkPage = serde_json::from_str(&body)?;
        Ok(page)
    }

    /// Probes every candidate's image concurrently and keeps only the
    /// confirmed ones, preserving candidate order.
    async fn probe_all(&self, candidates: Vec<ArtworkRecord>) -> Collection {
        let probes = candidates.iter().filter_map(|record| {
            DisplayArtwork::from_record(record, &self.config.image_base).map(|display| async move {
                if self.probe(&display).await {
                    Some(display)
                } else {
                    None
                }
            })
        });

        let results = join_all(probes).await;
        let confirmed: Vec<DisplayArtwork> = results.into_iter().flatten().collect();
        debug!(confirmed = confirmed.len(), "image probes complete");
        Collection::from_resolved(confirmed)
    }

    /// Confirms that an artwork's image is reachable.
    async fn probe(&self, artwork: &DisplayArtwork) -> bool {
        match self.client.get(&artwork.image_url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(
                    title = %artwork.title,
                    status = response.status().as_u16(),
                    "image not found, dropping artwork"
                );
                false
            }
            Err(e) => {
                warn!(title = %artwork.title, error = %e, "image probe failed, dropping artwork");
                false
            }
        }
    }

    /// Warms an artwork's initial image (lazy strategy).
    ///
    /// A failure is only logged; the entry is never removed. Returns whether
    /// the fetch succeeded, for callers that want to report on it.
    pub async fn warm_image(&self, artwork: &DisplayArtwork) -> bool {
        let url = artwork.initial_image_url();
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                // Drain the body so the fetch actually completes
                response.bytes().await.is_ok()
            }
            Ok(response) => {
                warn!(
                    title = %artwork.title,
                    status = response.status().as_u16(),
                    "image failed to load"
                );
                false
            }
            Err(e) => {
                warn!(title = %artwork.title, error = %e, "image failed to load");
                false
            }
        }
    }
}
