//! Google web search via the plain HTML results page.

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
use crate::validate::is_on_coupon_host;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Google search scraper.
///
/// Result links on the HTML page are usually wrapped as
/// `/url?q=<target>&sa=...`; the wrapper is unpacked and Google's own
/// navigation links are dropped.
#[derive(Debug, Clone)]
pub struct GoogleBackend {
    fetcher: PageFetcher,
    endpoint: String,
    coupon_host: String,
    timeout: Duration,
}

impl GoogleBackend {
    #[must_use]
    pub fn new(fetcher: PageFetcher, config: &ScoutConfig) -> Self {
        Self {
            fetcher,
            endpoint: config.google_url.clone(),
            coupon_host: config.coupon_host.clone(),
            timeout: config.link_timeout(),
        }
    }

    fn query_url(&self, query: &str, limit: usize) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!("{}?q={encoded}&num={limit}&hl=en&start=0", self.endpoint)
    }
}

impl SearchBackend for GoogleBackend {
    fn name(&self) -> &'static str {
        "google"
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, FetchError>> {
        Box::pin(async move {
            let url = self.query_url(query, limit);
            let page = self.fetcher.try_get(&url, self.timeout).await?;
            Ok(parse_google_html(&page.body, &self.coupon_host, limit))
        })
    }
}

/// Extracts up to `limit` outbound result URLs from a Google results page.
pub(crate) fn parse_google_html(html: &str, coupon_host: &str, limit: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(unwrap_google_href)
        .filter(|url| is_external_result(url) && !is_on_coupon_host(url, coupon_host))
        .take(limit)
        .collect()
}

/// Resolves `/url?q=...` wrappers; passes absolute links through.
fn unwrap_google_href(href: &str) -> Option<String> {
    if href.starts_with("/url?") {
        let wrapped = Url::parse("https://www.google.com").ok()?.join(href).ok()?;
        return wrapped
            .query_pairs()
            .find(|(key, _)| key == "q" || key == "url")
            .map(|(_, value)| value.into_owned());
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_owned());
    }
    None
}

fn is_external_result(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    matches!(parsed.scheme(), "http" | "https")
        && !host.contains("google.")
        && !host.ends_with("gstatic.com")
        && !host.ends_with("googleusercontent.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "offers.greatclips.com";

    const MOCK_GOOGLE_HTML: &str = r#"<html><body>
<div><a href="/url?q=https://greatclipsdeal.com/&amp;sa=U&amp;ved=abc">Great Clips Deal</a></div>
<div><a href="/url?q=https://offers.greatclips.com/7GqMiDg&amp;sa=U">Direct coupon</a></div>
<div><a href="https://www.google.com/preferences">Settings</a></div>
<div><a href="/search?q=more">More results</a></div>
<div><a href="https://coupons-greatclips.com/9-99">Coupons</a></div>
<div><a href="https://maps.google.com/x">Maps</a></div>
</body></html>"#;

    #[test]
    fn unwraps_redirects_and_drops_google_and_coupon_hosts() {
        let urls = parse_google_html(MOCK_GOOGLE_HTML, HOST, 10);
        assert_eq!(
            urls,
            vec![
                "https://greatclipsdeal.com/",
                "https://coupons-greatclips.com/9-99"
            ]
        );
    }

    #[test]
    fn respects_limit() {
        let urls = parse_google_html(MOCK_GOOGLE_HTML, HOST, 1);
        assert_eq!(urls, vec!["https://greatclipsdeal.com/"]);
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert!(parse_google_html("<html><body></body></html>", HOST, 10).is_empty());
    }

    #[test]
    fn query_url_encodes_the_query() {
        let config = ScoutConfig::default();
        let backend = GoogleBackend::new(PageFetcher::new(&config).unwrap(), &config);
        assert_eq!(
            backend.query_url("\"offers.greatclips.com\" coupon", 5),
            "https://www.google.com/search?q=%22offers%2Egreatclips%2Ecom%22%20coupon&num=5&hl=en&start=0"
        );
    }
}
