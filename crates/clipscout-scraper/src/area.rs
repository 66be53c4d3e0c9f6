//! Whole-word, case-insensitive target area matching.

use regex::{Regex, RegexBuilder};

use crate::error::ScraperError;

/// Matches a caller-supplied area name as a whole word or phrase.
///
/// The area is escaped before it is embedded in the pattern, so characters
/// such as `.` or `(` match literally. A match must be bounded on each side
/// by a non-word character or the edge of the text, including when the
/// area itself starts or ends in punctuation.
#[derive(Debug, Clone)]
pub struct AreaMatcher {
    area: String,
    pattern: Regex,
}

impl AreaMatcher {
    /// # Errors
    ///
    /// Returns [`ScraperError::EmptyArea`] for a blank area and
    /// [`ScraperError::InvalidArea`] if the escaped pattern exceeds the regex
    /// size limits.
    pub fn new(area: &str) -> Result<Self, ScraperError> {
        if area.trim().is_empty() {
            return Err(ScraperError::EmptyArea);
        }

        let pattern = RegexBuilder::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(area)))
            .case_insensitive(true)
            .build()
            .map_err(|e| ScraperError::InvalidArea {
                area: area.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            area: area.to_owned(),
            pattern,
        })
    }

    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
