use super::*;
use clipscout_core::CouponDetail;
use clipscout_scraper::Progress;

fn detail(url: &str, offer: &str) -> CouponDetail {
    CouponDetail {
        url: url.to_owned(),
        area_text: "Valid in Wilmington, Delaware only.".to_owned(),
        offer_value: offer.to_owned(),
        is_target: true,
    }
}

#[test]
fn parses_area_with_default_limit() {
    let cli = Cli::try_parse_from(["clipscout", "--area", "Kansas City"])
        .expect("expected valid cli args");
    assert_eq!(cli.area, "Kansas City");
    assert_eq!(cli.limit, 20);
    assert!(!cli.json);
}

#[test]
fn parses_limit_and_json() {
    let cli = Cli::try_parse_from(["clipscout", "--area", "DC", "--limit", "5", "--json"])
        .expect("expected valid cli args");
    assert_eq!(cli.limit, 5);
    assert!(cli.json);
}

#[test]
fn area_is_required() {
    assert!(Cli::try_parse_from(["clipscout"]).is_err());
}

#[test]
fn non_numeric_limit_is_rejected() {
    assert!(Cli::try_parse_from(["clipscout", "--area", "DC", "--limit", "many"]).is_err());
}

#[test]
fn text_block_lists_each_match() {
    let found = vec![
        detail("https://offers.greatclips.com/aaa", "$8.99"),
        detail("https://offers.greatclips.com/bbb", "Unknown"),
    ];
    let text = report::render_text(&found);
    assert_eq!(
        text,
        "\n=== Matched Coupons ===\n\
         URL: https://offers.greatclips.com/aaa\n\
         Offer: $8.99\n\
         --------------------\n\
         URL: https://offers.greatclips.com/bbb\n\
         Offer: Unknown\n\
         --------------------\n"
    );
}

#[test]
fn json_output_is_an_array_of_records() {
    let found = vec![detail("https://offers.greatclips.com/aaa", "$2 off")];
    let json = report::render_json(&found).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["url"], "https://offers.greatclips.com/aaa");
    assert_eq!(parsed[0]["offer_value"], "$2 off");
    assert_eq!(parsed[0]["is_target"], true);
}

#[test]
fn progress_line_shows_counts() {
    let line = report::progress_line(Progress {
        processed: 3,
        total: 12,
        matches: 1,
    });
    assert_eq!(line, "  Checked coupon 3/12 (1 matches so far)...");
}
