//! Coupon link extraction from aggregator pages.

use std::sync::LazyLock;
use std::time::Duration;

use scraper::{Html, Selector};

use crate::fetch::PageFetcher;
use crate::validate::is_valid_coupon_url;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Returns every anchor target in `html` that is a valid coupon link, in
/// document order. Repeats are kept; dedup happens downstream.
///
/// Links are returned exactly as the attribute value was written.
#[must_use]
pub fn extract_coupon_links(html: &str, coupon_host: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| is_valid_coupon_url(href, coupon_host))
        .map(str::to_owned)
        .collect()
}

/// Fetches `page_url` and extracts its coupon links.
///
/// A failed fetch is logged and yields an empty list.
pub async fn scrape_coupon_links(
    fetcher: &PageFetcher,
    page_url: &str,
    coupon_host: &str,
    timeout: Duration,
) -> Vec<String> {
    let Some(page) = fetcher.fetch(page_url, timeout).await else {
        return Vec::new();
    };

    let links = extract_coupon_links(&page.body, coupon_host);
    tracing::info!(page = page_url, count = links.len(), "found coupon links");
    links
}
