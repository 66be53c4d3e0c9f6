//! Rendering of matched coupons and run progress for the terminal.

use std::fmt::Write;

use clipscout_core::CouponDetail;
use clipscout_scraper::Progress;

const HEADER: &str = "=== Matched Coupons ===";
const SEPARATOR: &str = "--------------------";

pub(crate) fn progress_line(progress: Progress) -> String {
    format!(
        "  Checked coupon {}/{} ({} matches so far)...",
        progress.processed, progress.total, progress.matches
    )
}

/// Text block listing each match's URL and offer.
pub(crate) fn render_text(found: &[CouponDetail]) -> String {
    let mut out = format!("\n{HEADER}\n");
    for detail in found {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "URL: {}", detail.url);
        let _ = writeln!(out, "Offer: {}", detail.offer_value);
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}

pub(crate) fn render_json(found: &[CouponDetail]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(found)
}
