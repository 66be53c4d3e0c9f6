use std::time::Duration;

/// Host that serves the vendor's coupon pages.
pub const DEFAULT_COUPON_HOST: &str = "offers.greatclips.com";

pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
);
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

pub const DEFAULT_GOOGLE_URL: &str = "https://www.google.com/search";
pub const DEFAULT_DUCKDUCKGO_URL: &str = "https://html.duckduckgo.com/html/";
pub const DEFAULT_BING_URL: &str = "https://www.bing.com/search";

/// Aggregator pages known to list coupon links, in scrape order.
pub const KNOWN_AGGREGATORS: [&str; 6] = [
    "https://greatclipsdeal.com/",
    "https://coupons-greatclips.com/9-99",
    "https://coupons-greatclips.com/8-99",
    "https://coupons-greatclips.com/5-off",
    "https://coupons-greatclips.com/7-99",
    "https://coupons-greatclips.com/14-99",
];

/// Run-wide settings handed to every pipeline component at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutConfig {
    /// Authority (`host` or `host:port`) that serves coupon pages.
    pub coupon_host: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    /// Timeout for search-result and aggregator page fetches.
    pub link_timeout_secs: u64,
    /// Timeout for individual coupon page fetches.
    pub detail_timeout_secs: u64,
    /// Pause between consecutive search backend calls.
    pub backend_delay_ms: u64,
    /// Pause between consecutive aggregator page fetches.
    pub page_delay_ms: u64,
    /// Pause after every coupon page, whatever the outcome.
    pub detail_delay_ms: u64,
    pub known_aggregators: Vec<String>,
    pub google_url: String,
    pub duckduckgo_url: String,
    pub bing_url: String,
    pub log_level: String,
}

impl ScoutConfig {
    #[must_use]
    pub fn link_timeout(&self) -> Duration {
        Duration::from_secs(self.link_timeout_secs)
    }

    #[must_use]
    pub fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_secs)
    }

    #[must_use]
    pub fn backend_delay(&self) -> Duration {
        Duration::from_millis(self.backend_delay_ms)
    }

    #[must_use]
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    #[must_use]
    pub fn detail_delay(&self) -> Duration {
        Duration::from_millis(self.detail_delay_ms)
    }

    /// The search query sent to every backend.
    #[must_use]
    pub fn search_query(&self) -> String {
        format!("\"{}\" coupon", self.coupon_host)
    }
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            coupon_host: DEFAULT_COUPON_HOST.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            link_timeout_secs: 15,
            detail_timeout_secs: 10,
            backend_delay_ms: 2000,
            page_delay_ms: 1000,
            detail_delay_ms: 1000,
            known_aggregators: KNOWN_AGGREGATORS.iter().map(|s| (*s).to_string()).collect(),
            google_url: DEFAULT_GOOGLE_URL.to_string(),
            duckduckgo_url: DEFAULT_DUCKDUCKGO_URL.to_string(),
            bing_url: DEFAULT_BING_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}
