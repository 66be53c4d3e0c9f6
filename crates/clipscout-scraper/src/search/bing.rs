//! Bing search via the scraped results page.

use std::sync::LazyLock;
use std::time::Duration;

use clipscout_core::ScoutConfig;
use futures::future::BoxFuture;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::{Html, Selector};
use url::Url;

use super::SearchBackend;
use crate::error::FetchError;
use crate::fetch::PageFetcher;
use crate::validate::authority;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Bing results-page scraper.
///
/// Keeps every outbound http(s) anchor on the page that does not belong to
/// Bing or Microsoft.
#[derive(Debug, Clone)]
pub struct BingBackend {
    fetcher: PageFetcher,
    endpoint: String,
    coupon_host: String,
    timeout: Duration,
}

impl BingBackend {
    #[must_use]
    pub fn new(fetcher: PageFetcher, config: &ScoutConfig) -> Self {
        Self {
            fetcher,
            endpoint: config.bing_url.clone(),
            coupon_host: config.coupon_host.clone(),
            timeout: config.link_timeout(),
        }
    }

    fn query_url(&self, query: &str, count: usize) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!("{}?q={encoded}&count={count}", self.endpoint)
    }
}

impl SearchBackend for BingBackend {
    fn name(&self) -> &'static str {
        "bing"
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, FetchError>> {
        Box::pin(async move {
            let url = self.query_url(query, limit);
            let page = self.fetcher.try_get(&url, self.timeout).await?;
            Ok(parse_bing_html(&page.body, &self.coupon_host))
        })
    }
}

/// Extracts outbound result links from a Bing results page.
pub(crate) fn parse_bing_html(html: &str, coupon_host: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| is_outbound(href, coupon_host))
        .map(str::to_owned)
        .collect()
}

fn is_outbound(href: &str, coupon_host: &str) -> bool {
    let Ok(url) = Url::parse(href) else {
        return false;
    };
    let Some(netloc) = authority(&url) else {
        return false;
    };
    let netloc = netloc.to_ascii_lowercase();

    matches!(url.scheme(), "http" | "https")
        && !netloc.is_empty()
        && !netloc.contains("bing.com")
        && !netloc.contains("microsoft.com")
        && !netloc.eq_ignore_ascii_case(coupon_host)
}
