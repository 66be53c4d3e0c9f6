use serde::{Deserialize, Serialize};

/// Offer value reported when no monetary amount appears on a coupon page.
pub const UNKNOWN_OFFER: &str = "Unknown";

/// Details extracted from one successfully fetched coupon page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponDetail {
    pub url: String,
    /// Description and terms text, space-joined.
    pub area_text: String,
    /// First dollar amount found in `area_text`, or [`UNKNOWN_OFFER`].
    pub offer_value: String,
    /// Whether `area_text` mentions the run's target area.
    pub is_target: bool,
}
