//! Search backends that turn a text query into candidate aggregator pages.
//!
//! Each engine returns results in its own shape and fails in its own ways.
//! [`SearchBackend`] flattens all of them to "zero or more page URLs, or a
//! [`FetchError`]", so discovery can treat them uniformly.

mod bing;
mod duckduckgo;
mod google;

pub use bing::BingBackend;
pub use duckduckgo::DuckDuckGoBackend;
pub use google::GoogleBackend;

use clipscout_core::ScoutConfig;
use futures::future::BoxFuture;

use crate::error::FetchError;
use crate::fetch::PageFetcher;

/// A web search engine queried for pages that link to coupons.
///
/// Implementations drop every result on the coupon host itself: a direct
/// coupon link is not an aggregator page.
pub trait SearchBackend: Send + Sync {
    /// Engine name for log fields.
    fn name(&self) -> &'static str;

    /// Runs `query`, asking the engine for up to `limit` results.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the engine cannot be reached, refuses the
    /// request, or answers with something unreadable.
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, FetchError>>;
}

/// The production backends in query order: Google, DuckDuckGo, Bing.
#[must_use]
pub fn default_backends(
    fetcher: &PageFetcher,
    config: &ScoutConfig,
) -> Vec<Box<dyn SearchBackend>> {
    vec![
        Box::new(GoogleBackend::new(fetcher.clone(), config)),
        Box::new(DuckDuckGoBackend::new(fetcher.clone(), config)),
        Box::new(BingBackend::new(fetcher.clone(), config)),
    ]
}
