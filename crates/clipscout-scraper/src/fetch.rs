//! Shared HTTP access for every page the pipeline touches.

use std::time::Duration;

use clipscout_core::ScoutConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, RequestBuilder};

use crate::error::{FetchError, ScraperError};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// HTTP GET/POST with one fixed browser-like identity.
///
/// Cloning is cheap and shares the underlying connection pool and cookie
/// jar, so every component of a run talks through the same client.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Builds the shared client with the configured identity headers.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidHeader`] if a configured header value is
    /// not a legal HTTP header, or [`ScraperError::Http`] if the client
    /// cannot be constructed.
    pub fn new(config: &ScoutConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        headers.insert(ACCEPT, header_value("Accept", &config.accept)?);
        headers.insert(
            ACCEPT_LANGUAGE,
            header_value("Accept-Language", &config.accept_language)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url`, returning `None` (after logging) on any failure.
    pub async fn fetch(&self, url: &str, timeout: Duration) -> Option<FetchedPage> {
        match self.try_get(url, timeout).await {
            Ok(page) => Some(page),
            Err(e) => {
                log_fetch_failure(&e);
                None
            }
        }
    }

    /// Fetches `url`, classifying any failure.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for connection failures, timeouts, non-2xx
    /// statuses, unreadable bodies, and anything else `reqwest` reports.
    pub async fn try_get(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError> {
        self.send(self.client.get(url), url, timeout).await
    }

    /// Submits `form` to `url` as `application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Same classification as [`PageFetcher::try_get`].
    pub async fn try_post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<FetchedPage, FetchError> {
        self.send(self.client.post(url).form(form), url, timeout).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        url: &str,
        timeout: Duration,
    ) -> Result<FetchedPage, FetchError> {
        let response = request
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "page fetched");

        Ok(FetchedPage {
            url: url.to_owned(),
            status: status.as_u16(),
            body,
        })
    }
}

/// Emits the standard diagnostic for a failed fetch.
pub(crate) fn log_fetch_failure(err: &FetchError) {
    tracing::warn!(kind = err.kind(), error = %err, "page fetch failed");
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ScraperError> {
    HeaderValue::from_str(value).map_err(|e| ScraperError::InvalidHeader {
        name,
        reason: e.to_string(),
    })
}
