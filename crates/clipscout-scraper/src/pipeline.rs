//! End-to-end run: discover coupon URLs, then keep the ones for the area.

use std::time::Duration;

use clipscout_core::{CouponDetail, ScoutConfig};

use crate::area::AreaMatcher;
use crate::detail::DetailExtractor;
use crate::discovery::Discovery;
use crate::error::ScraperError;
use crate::fetch::PageFetcher;
use crate::rate_limit::pause;

/// Running tally reported after each coupon page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    pub matches: usize,
}

/// Finds coupons that apply to one target area.
pub struct CouponScout {
    discovery: Discovery,
    details: DetailExtractor,
    detail_delay: Duration,
}

impl CouponScout {
    /// Wires the production pipeline around one shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the target area is blank or the HTTP
    /// client cannot be built.
    pub fn new(config: &ScoutConfig, target_area: &str) -> Result<Self, ScraperError> {
        let matcher = AreaMatcher::new(target_area)?;
        let fetcher = PageFetcher::new(config)?;
        let details = DetailExtractor::new(fetcher.clone(), matcher, config.detail_timeout());
        let discovery = Discovery::new(fetcher, config);
        Ok(Self::from_parts(discovery, details, config.detail_delay()))
    }

    #[must_use]
    pub fn from_parts(
        discovery: Discovery,
        details: DetailExtractor,
        detail_delay: Duration,
    ) -> Self {
        Self {
            discovery,
            details,
            detail_delay,
        }
    }

    #[must_use]
    pub fn target_area(&self) -> &str {
        self.details.matcher().area()
    }

    /// Runs the pipeline with `limit` results requested per search backend.
    pub async fn run(&self, limit: usize) -> Vec<CouponDetail> {
        self.run_with_progress(limit, |_| {}).await
    }

    /// Like [`CouponScout::run`], calling `on_progress` after every coupon
    /// page whether or not it matched.
    pub async fn run_with_progress<F>(
        &self,
        limit: usize,
        mut on_progress: F,
    ) -> Vec<CouponDetail>
    where
        F: FnMut(Progress),
    {
        let area = self.target_area();
        let urls = self.discovery.discover(limit).await;
        if urls.is_empty() {
            return Vec::new();
        }

        let total = urls.len();
        tracing::info!(total, "scraping coupon details");

        let mut found = Vec::new();
        for (i, url) in urls.iter().enumerate() {
            if let Some(detail) = self.details.extract(url).await {
                if detail.is_target {
                    tracing::info!(
                        url = %detail.url,
                        offer = %detail.offer_value,
                        area,
                        "found matching coupon"
                    );
                    found.push(detail);
                }
            }

            let progress = Progress {
                processed: i + 1,
                total,
                matches: found.len(),
            };
            tracing::debug!(
                processed = progress.processed,
                total,
                matches = progress.matches,
                "coupon checked"
            );
            on_progress(progress);

            pause(self.detail_delay).await;
        }

        if found.is_empty() {
            tracing::info!(area, "no coupons found for area");
        } else {
            tracing::info!(area, matches = found.len(), "coupon search complete");
        }

        found
    }
}
