//! Candidate page discovery and coupon link collection.

use std::time::Duration;

use clipscout_core::ScoutConfig;

use crate::dedup::OrderedSet;
use crate::fetch::PageFetcher;
use crate::links::scrape_coupon_links;
use crate::rate_limit::pause;
use crate::search::{default_backends, SearchBackend};

/// Fans a fixed query out to every search backend, adds the known
/// aggregators, then scrapes each resulting page for coupon links.
pub struct Discovery {
    backends: Vec<Box<dyn SearchBackend>>,
    fetcher: PageFetcher,
    query: String,
    coupon_host: String,
    known_aggregators: Vec<String>,
    link_timeout: Duration,
    backend_delay: Duration,
    page_delay: Duration,
}

impl Discovery {
    /// Discovery over the production Google, DuckDuckGo and Bing backends.
    #[must_use]
    pub fn new(fetcher: PageFetcher, config: &ScoutConfig) -> Self {
        let backends = default_backends(&fetcher, config);
        Self::with_backends(fetcher, config, backends)
    }

    /// Discovery over caller-supplied backends, queried in the given order.
    #[must_use]
    pub fn with_backends(
        fetcher: PageFetcher,
        config: &ScoutConfig,
        backends: Vec<Box<dyn SearchBackend>>,
    ) -> Self {
        Self {
            backends,
            fetcher,
            query: config.search_query(),
            coupon_host: config.coupon_host.clone(),
            known_aggregators: config.known_aggregators.clone(),
            link_timeout: config.link_timeout(),
            backend_delay: config.backend_delay(),
            page_delay: config.page_delay(),
        }
    }

    /// Collects the deduplicated list of pages to scrape: backend results in
    /// backend order, then any known aggregator not already listed.
    ///
    /// A failing backend contributes nothing; if all fail the known
    /// aggregators alone are returned.
    pub async fn candidate_pages(&self, limit: usize) -> Vec<String> {
        let mut pages = OrderedSet::new();
        let mut from_search = 0usize;

        for (i, backend) in self.backends.iter().enumerate() {
            if i > 0 {
                pause(self.backend_delay).await;
            }
            tracing::info!(backend = backend.name(), query = %self.query, "searching");
            let found = match backend.search(&self.query, limit).await {
                Ok(found) => found,
                Err(e) => {
                    tracing::warn!(
                        backend = backend.name(),
                        kind = e.kind(),
                        error = %e,
                        "search backend failed"
                    );
                    Vec::new()
                }
            };
            tracing::info!(backend = backend.name(), count = found.len(), "search returned pages");
            from_search += found.len();
            pages.extend(found);
        }

        let searched_unique = pages.len();
        pages.extend(self.known_aggregators.iter().map(String::as_str));

        tracing::info!(
            total = pages.len(),
            from_search,
            searched_unique,
            known = self.known_aggregators.len(),
            "aggregator pages to scrape"
        );

        pages.into_vec()
    }

    /// Runs the full discovery pass and returns unique coupon URLs in
    /// first-seen order. An empty result is a normal outcome.
    pub async fn discover(&self, limit: usize) -> Vec<String> {
        tracing::info!("discovering coupon URLs");
        let pages = self.candidate_pages(limit).await;

        let mut coupons = OrderedSet::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                pause(self.page_delay).await;
            }
            let links =
                scrape_coupon_links(&self.fetcher, page, &self.coupon_host, self.link_timeout)
                    .await;
            coupons.extend(links);
        }

        if coupons.is_empty() {
            tracing::warn!("no coupon URLs discovered from any source");
        } else {
            tracing::info!(count = coupons.len(), "discovered unique coupon URLs");
        }

        coupons.into_vec()
    }
}
