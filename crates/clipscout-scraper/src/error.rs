use thiserror::Error;

/// Why a single outbound request produced no usable page.
///
/// Callers never propagate these past their own boundary: a failed fetch is
/// logged and turned into an empty result for that one request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("could not read document from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("request to {url} failed: {reason}")]
    Unexpected { url: String, reason: String },
}

impl FetchError {
    /// Sorts a `reqwest` failure into the fetch taxonomy.
    pub(crate) fn classify(url: &str, err: reqwest::Error) -> Self {
        let url = url.to_owned();
        if err.is_timeout() {
            Self::Timeout { url }
        } else if err.is_connect() {
            Self::Connection { url, source: err }
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                status: status.as_u16(),
                url,
            }
        } else if err.is_decode() || err.is_body() {
            Self::Parse {
                url,
                reason: err.to_string(),
            }
        } else {
            Self::Unexpected {
                url,
                reason: err.to_string(),
            }
        }
    }

    /// Short label for structured log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "connection",
            Self::Timeout { .. } => "timeout",
            Self::HttpStatus { .. } => "http_status",
            Self::Parse { .. } => "parse",
            Self::Unexpected { .. } => "unexpected",
        }
    }
}

/// Failures that stop a run before it starts: bad client setup or a bad
/// invocation.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error("target area must not be blank")]
    EmptyArea,

    #[error("target area \"{area}\" cannot be matched: {reason}")]
    InvalidArea { area: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http_status() {
        let err = FetchError::HttpStatus {
            status: 404,
            url: "https://offers.greatclips.com/gone".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 404 from https://offers.greatclips.com/gone"
        );
        assert_eq!(err.kind(), "http_status");
    }

    #[test]
    fn display_timeout() {
        let err = FetchError::Timeout {
            url: "https://coupons-greatclips.com/9-99".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "request to https://coupons-greatclips.com/9-99 timed out"
        );
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn kinds_are_distinct() {
        let parse = FetchError::Parse {
            url: String::new(),
            reason: String::new(),
        };
        let unexpected = FetchError::Unexpected {
            url: String::new(),
            reason: String::new(),
        };
        assert_eq!(parse.kind(), "parse");
        assert_eq!(unexpected.kind(), "unexpected");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
        assert_send_sync::<ScraperError>();
    }
}
