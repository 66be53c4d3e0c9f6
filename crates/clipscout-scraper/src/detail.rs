//! Coupon page parsing: section splitting, offer value, and area match.
//!
//! A coupon page keeps its copy inside `div#offer-details`, where `<h4>`
//! headings introduce a "Description" and a "Terms and Conditions" block.
//! The region is flattened into [`ContentToken`]s in document order and fed
//! through a [`SectionCollector`], a three-state machine switched only by
//! heading text. Pages without the region fall back to their whole body.

use std::sync::LazyLock;
use std::time::Duration;

use clipscout_core::{CouponDetail, UNKNOWN_OFFER};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::area::AreaMatcher;
use crate::fetch::PageFetcher;

static OFFER_DETAILS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#offer-details").expect("valid offer details selector"));

static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid body selector"));

static OFFER_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$\d+(?:\.\d{2})?(?:\s*off)?").expect("valid offer regex"));

/// One unit of flattened page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentToken {
    Heading(String),
    Text(String),
}

/// Which block of the offer text is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Description,
    Terms,
}

impl Section {
    /// The state entered after a heading with this text.
    #[must_use]
    pub fn after_heading(heading: &str) -> Self {
        let heading = heading.to_lowercase();
        if heading.contains("description") {
            Self::Description
        } else if heading.contains("term") {
            Self::Terms
        } else {
            Self::None
        }
    }
}

/// Description and terms text of a coupon page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferSections {
    pub description: String,
    pub terms: String,
}

impl OfferSections {
    /// Both sections space-joined, skipping an empty one.
    #[must_use]
    pub fn combined(&self) -> String {
        [self.description.as_str(), self.terms.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Accumulates text into the active section. Text seen while no section
/// is active is dropped.
#[derive(Debug, Default)]
pub struct SectionCollector {
    state: Section,
    description: Vec<String>,
    terms: Vec<String>,
}

impl SectionCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> Section {
        self.state
    }

    pub fn feed(&mut self, token: ContentToken) {
        match token {
            ContentToken::Heading(text) => self.state = Section::after_heading(&text),
            ContentToken::Text(text) => match self.state {
                Section::Description => self.description.push(text),
                Section::Terms => self.terms.push(text),
                Section::None => {}
            },
        }
    }

    #[must_use]
    pub fn finish(self) -> OfferSections {
        OfferSections {
            description: self.description.join(" "),
            terms: self.terms.join(" "),
        }
    }
}

/// Fetches coupon pages and turns them into [`CouponDetail`] records.
#[derive(Debug, Clone)]
pub struct DetailExtractor {
    fetcher: PageFetcher,
    matcher: AreaMatcher,
    timeout: Duration,
}

impl DetailExtractor {
    #[must_use]
    pub fn new(fetcher: PageFetcher, matcher: AreaMatcher, timeout: Duration) -> Self {
        Self {
            fetcher,
            matcher,
            timeout,
        }
    }

    #[must_use]
    pub fn matcher(&self) -> &AreaMatcher {
        &self.matcher
    }

    /// Fetches and parses one coupon page. Returns `None` if the fetch
    /// fails in any way; the failure is logged.
    pub async fn extract(&self, url: &str) -> Option<CouponDetail> {
        let page = self.fetcher.fetch(url, self.timeout).await?;
        Some(detail_from_html(url, &page.body, &self.matcher))
    }
}

/// Builds the record for an already fetched coupon page.
#[must_use]
pub fn detail_from_html(url: &str, html: &str, matcher: &AreaMatcher) -> CouponDetail {
    let document = Html::parse_document(html);
    let sections = offer_sections(&document).unwrap_or_else(|| {
        tracing::warn!(url, "no #offer-details found; falling back to body text");
        OfferSections {
            description: body_text(&document),
            terms: String::new(),
        }
    });

    let area_text = sections.combined();
    let offer_value = extract_offer_value(&area_text);
    let is_target = matcher.matches(&area_text);

    CouponDetail {
        url: url.to_owned(),
        area_text,
        offer_value,
        is_target,
    }
}

/// Splits the `#offer-details` region into sections, or `None` if the page
/// has no such region.
#[must_use]
pub fn parse_offer_sections(html: &str) -> Option<OfferSections> {
    offer_sections(&Html::parse_document(html))
}

fn offer_sections(document: &Html) -> Option<OfferSections> {
    let region = document.select(&OFFER_DETAILS).next()?;

    let mut collector = SectionCollector::new();
    for token in content_tokens(region) {
        collector.feed(token);
    }
    Some(collector.finish())
}

/// First dollar amount in `text` (with cents and a trailing "off" when
/// present), or [`UNKNOWN_OFFER`].
#[must_use]
pub fn extract_offer_value(text: &str) -> String {
    OFFER_VALUE
        .find(text)
        .map_or_else(|| UNKNOWN_OFFER.to_owned(), |m| m.as_str().to_owned())
}

/// Flattens `region` into heading and text tokens in document order.
///
/// A heading contributes one token carrying its full text; text inside
/// headings, scripts and styles is not repeated as separate text tokens.
pub(crate) fn content_tokens(region: ElementRef<'_>) -> Vec<ContentToken> {
    let mut tokens = Vec::new();

    for node in region.descendants() {
        if let Some(element) = ElementRef::wrap(node) {
            if is_heading(element.value().name()) {
                tokens.push(ContentToken::Heading(joined_text(element)));
            }
            continue;
        }

        let Some(text) = node.value().as_text() else {
            continue;
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let suppressed = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| {
                let name = el.value().name();
                is_heading(name) || is_invisible(name)
            });
        if !suppressed {
            tokens.push(ContentToken::Text(text.to_owned()));
        }
    }

    tokens
}

/// Visible text of the whole `<body>`, space-joined.
fn body_text(document: &Html) -> String {
    document
        .select(&BODY)
        .next()
        .map(visible_text)
        .unwrap_or_default()
}

fn visible_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| is_invisible(el.value().name()));
            (!hidden).then_some(text.trim())
        })
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn joined_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn is_invisible(name: &str) -> bool {
    matches!(name, "script" | "style" | "noscript" | "template")
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
