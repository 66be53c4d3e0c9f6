//! Integration tests for the Google, DuckDuckGo and Bing backends.
//!
//! Every backend is pointed at a local `wiremock` server through its
//! configured endpoint.

use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clipscout_core::ScoutConfig;
use clipscout_scraper::{
    BingBackend, DuckDuckGoBackend, FetchError, GoogleBackend, PageFetcher, SearchBackend,
};

const QUERY: &str = "\"offers.greatclips.com\" coupon";

fn config_for(server: &MockServer) -> ScoutConfig {
    ScoutConfig {
        google_url: format!("{}/search", server.uri()),
        duckduckgo_url: format!("{}/html/", server.uri()),
        bing_url: format!("{}/bing/search", server.uri()),
        link_timeout_secs: 5,
        ..ScoutConfig::default()
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "text/html")
}

#[tokio::test]
async fn google_backend_returns_unwrapped_result_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", QUERY))
        .and(query_param("num", "5"))
        .respond_with(html(
            r#"<a href="/url?q=https://deal-site.com/coupons&amp;sa=U">Deals</a>
<a href="/url?q=https://offers.greatclips.com/aaa&amp;sa=U">Direct</a>
<a href="https://accounts.google.com/ServiceLogin">Sign in</a>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = GoogleBackend::new(PageFetcher::new(&config).unwrap(), &config);
    let pages = backend.search(QUERY, 5).await.expect("expected results");
    assert_eq!(pages, vec!["https://deal-site.com/coupons"]);
    assert_eq!(backend.name(), "google");
}

#[tokio::test]
async fn google_backend_reports_blocking_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = GoogleBackend::new(PageFetcher::new(&config).unwrap(), &config);
    let err = backend.search(QUERY, 5).await.unwrap_err();
    assert!(
        matches!(err, FetchError::HttpStatus { status: 429, .. }),
        "expected HttpStatus(429), got: {err:?}"
    );
}

#[tokio::test]
async fn duckduckgo_backend_posts_query_and_caps_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/html/"))
        .and(body_string_contains("q=%22offers.greatclips.com%22+coupon"))
        .respond_with(html(
            r#"<div class="result web-result"><a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fanother-site.com%2Fdeals&amp;rut=x">A</a></div>
<div class="result web-result"><a class="result__a" href="https://second-site.com/">B</a></div>
<div class="result web-result"><a class="result__a" href="https://third-site.com/">C</a></div>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = DuckDuckGoBackend::new(PageFetcher::new(&config).unwrap(), &config);
    let pages = backend.search(QUERY, 2).await.expect("expected results");
    assert_eq!(
        pages,
        vec!["https://another-site.com/deals", "https://second-site.com/"]
    );
}

#[tokio::test]
async fn duckduckgo_backend_tolerates_unexpected_markup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(html("<html><body><p>Please verify you are human</p></body></html>"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = DuckDuckGoBackend::new(PageFetcher::new(&config).unwrap(), &config);
    let pages = backend.search(QUERY, 10).await.expect("expected Ok");
    assert!(pages.is_empty());
}

#[tokio::test]
async fn bing_backend_passes_count_and_filters_hosts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bing/search"))
        .and(query_param("q", QUERY))
        .and(query_param("count", "7"))
        .respond_with(html(
            r#"<a href="https://www.bing.com/images">Images</a>
<li class="b_algo"><h2><a href="https://greatclipsdeal.com/">Deal</a></h2></li>
<li class="b_algo"><h2><a href="https://offers.greatclips.com/zzz">Coupon</a></h2></li>
<a href="https://support.microsoft.com/privacy">Privacy</a>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = BingBackend::new(PageFetcher::new(&config).unwrap(), &config);
    let pages = backend.search(QUERY, 7).await.expect("expected results");
    assert_eq!(pages, vec!["https://greatclipsdeal.com/"]);
}

#[tokio::test]
async fn bing_backend_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bing/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = BingBackend::new(PageFetcher::new(&config).unwrap(), &config);
    assert!(backend.search(QUERY, 7).await.is_err());
}
