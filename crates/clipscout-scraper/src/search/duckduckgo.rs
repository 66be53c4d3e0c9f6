//! DuckDuckGo search via the HTML-only endpoint.

use std::sync::LazyLock;
use std::time::Duration;

use clipscout_core::ScoutConfig;
use futures::future::BoxFuture;
use scraper::{Html, Selector};
use url::Url;

use super::SearchBackend;
use crate::error::FetchError;
use crate::fetch::PageFetcher;
use crate::validate::is_on_coupon_host;

static RESULT_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".result:not(.result--ad) a.result__a").expect("valid result link selector")
});

/// DuckDuckGo HTML search scraper.
///
/// The endpoint takes the query as a POST form and caps nothing itself, so
/// `max_results` is applied while parsing.
#[derive(Debug, Clone)]
pub struct DuckDuckGoBackend {
    fetcher: PageFetcher,
    endpoint: String,
    coupon_host: String,
    timeout: Duration,
}

impl DuckDuckGoBackend {
    #[must_use]
    pub fn new(fetcher: PageFetcher, config: &ScoutConfig) -> Self {
        Self {
            fetcher,
            endpoint: config.duckduckgo_url.clone(),
            coupon_host: config.coupon_host.clone(),
            timeout: config.link_timeout(),
        }
    }
}

impl SearchBackend for DuckDuckGoBackend {
    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
        max_results: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, FetchError>> {
        Box::pin(async move {
            let page = self
                .fetcher
                .try_post_form(&self.endpoint, &[("q", query)], self.timeout)
                .await?;
            Ok(parse_duckduckgo_html(
                &page.body,
                &self.coupon_host,
                max_results,
            ))
        })
    }
}

/// Extracts up to `max_results` result URLs from a DuckDuckGo HTML page.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    coupon_host: &str,
    max_results: usize,
) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&RESULT_LINK)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(unwrap_redirect)
        .filter(|url| !url.is_empty() && !is_on_coupon_host(url, coupon_host))
        .take(max_results)
        .collect()
}

/// Pulls the target out of `//duckduckgo.com/l/?uddg=<target>&rut=...`.
fn unwrap_redirect(href: &str) -> Option<String> {
    let full = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_owned()
    };

    let parsed = Url::parse(&full).ok()?;
    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full)
    }
}
