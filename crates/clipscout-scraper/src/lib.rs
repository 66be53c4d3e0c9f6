//! Coupon discovery and area filtering for clipscout.
//!
//! Queries several search engines for pages that link into the coupon host,
//! scrapes those pages (plus a fixed list of known aggregators) for coupon
//! links, then visits each coupon page and keeps the ones whose description
//! or terms mention the target area. Every network failure degrades to an
//! empty or absent result; nothing short of a bad invocation aborts a run.

pub mod area;
pub mod dedup;
pub mod detail;
pub mod discovery;
pub mod error;
pub mod fetch;
pub mod links;
pub mod pipeline;
pub mod search;
pub mod validate;

mod rate_limit;

pub use area::AreaMatcher;
pub use dedup::OrderedSet;
pub use detail::{ContentToken, DetailExtractor, OfferSections, Section, SectionCollector};
pub use discovery::Discovery;
pub use error::{FetchError, ScraperError};
pub use fetch::{FetchedPage, PageFetcher};
pub use links::{extract_coupon_links, scrape_coupon_links};
pub use pipeline::{CouponScout, Progress};
pub use search::{BingBackend, DuckDuckGoBackend, GoogleBackend, SearchBackend};
pub use validate::is_valid_coupon_url;
