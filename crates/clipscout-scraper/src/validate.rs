//! Coupon link validation.

use url::Url;

/// Returns `true` if `candidate` is an absolute http(s) link into
/// `coupon_host` with a path longer than `/`.
///
/// `coupon_host` is compared against the URL authority (`host` or
/// `host:port` when a non-default port is given), so subdomains and
/// look-alike suffixes never qualify. Unparsable input yields `false`.
#[must_use]
pub fn is_valid_coupon_url(candidate: &str, coupon_host: &str) -> bool {
    let Ok(url) = Url::parse(candidate) else {
        return false;
    };

    matches!(url.scheme(), "http" | "https")
        && authority(&url).is_some_and(|a| a.eq_ignore_ascii_case(coupon_host))
        && url.path().len() > 1
}

/// Returns `true` if `candidate` parses and its authority is `coupon_host`.
///
/// Used to drop search results that already point at a coupon page.
#[must_use]
pub fn is_on_coupon_host(candidate: &str, coupon_host: &str) -> bool {
    Url::parse(candidate)
        .ok()
        .and_then(|url| authority(&url))
        .is_some_and(|a| a.eq_ignore_ascii_case(coupon_host))
}

/// `host[:port]` of a parsed URL; `None` for host-less URLs.
pub(crate) fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}
