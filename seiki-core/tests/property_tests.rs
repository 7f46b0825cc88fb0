//! Property tests for the normalization pipeline

use proptest::prelude::*;
use seiki_core::width::alphanumeric;
use seiki_core::{normalize, Direction};
use unicode_normalization::is_nfd;

/// Text dense in the characters the stages actually rewrite
fn news_like_text() -> impl Strategy<Value = String> {
    r"[一二三四五六七八九〇十百千万億兆。 　\r\nＡ-Ｚａ-ｚ０-９ｦ-ﾟ()~#a-z0-9がかパ件社]{0,48}"
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "\\PC{0,64}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn normalize_is_idempotent_on_news_text(text in news_like_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn output_has_no_line_breaks_or_space_runs(text in news_like_text()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.contains(['\r', '\n']), "line break survived");
        prop_assert!(!normalized.contains("  "), "double ASCII space");
        prop_assert!(
            !normalized.contains("\u{3000}\u{3000}"),
            "double ideographic space"
        );
    }

    #[test]
    fn output_is_decomposed(text in "\\PC{0,64}") {
        prop_assert!(is_nfd(normalize(&text).as_str()));
    }

    #[test]
    fn alphanumeric_width_round_trip(c in "[0-9A-Za-z]") {
        let table = alphanumeric();
        let c = c.chars().next().unwrap();
        let full = table.convert(c, Direction::HalfToFull);
        prop_assert_eq!(table.convert(full, Direction::FullToHalf), c);
    }
}
