//! Half-width / full-width character tables
//!
//! Two fixed tables are built once per process and never mutated:
//! - [`alphanumeric`]: ASCII digits and Latin letters ⇄ their full-width forms
//! - [`punctuation`]: the ASCII symbols that are widened before numeral
//!   scanning, plus the hyphen (U+2010) that is narrowed to `-`
//!
//! Lookups are total: a character outside a table is returned unchanged.

pub mod kana;

pub use kana::{HalfwidthKanaWidener, WidthConverter};

use std::collections::HashMap;
use std::sync::OnceLock;

/// Conversion direction for a [`WidthTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Narrow form to wide form
    HalfToFull,
    /// Wide form to narrow form
    FullToHalf,
}

/// Half-width side of the punctuation table
const HALF_PUNCTUATION: &str = "\"#%&'()*+<=>?@[\\]^`{|}~\u{2010}";
/// Full-width side of the punctuation table, index-aligned with [`HALF_PUNCTUATION`]
const FULL_PUNCTUATION: &str = "＂＃％＆＇（）＊＋＜＝＞？＠［＼］＾｀｛｜｝〜-";

static ALPHANUMERIC: OnceLock<WidthTable> = OnceLock::new();
static PUNCTUATION: OnceLock<WidthTable> = OnceLock::new();

/// Bidirectional character map between two widths
#[derive(Debug, Clone)]
pub struct WidthTable {
    to_full: HashMap<char, char>,
    to_half: HashMap<char, char>,
}

impl WidthTable {
    /// Build a table from index-aligned pairs
    ///
    /// Panics if a character appears twice on either side: every table is a
    /// bijection and is only ever built from the constants in this module.
    fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut to_full = HashMap::new();
        let mut to_half = HashMap::new();

        for (half, full) in pairs {
            let previous_full = to_full.insert(half, full);
            let previous_half = to_half.insert(full, half);
            assert!(
                previous_full.is_none() && previous_half.is_none(),
                "width table is not a bijection at {half:?} / {full:?}"
            );
        }

        Self { to_full, to_half }
    }

    /// Convert one character, or return it unchanged when outside the table
    #[inline]
    pub fn convert(&self, ch: char, direction: Direction) -> char {
        let map = match direction {
            Direction::HalfToFull => &self.to_full,
            Direction::FullToHalf => &self.to_half,
        };
        map.get(&ch).copied().unwrap_or(ch)
    }

    /// Convert every character of `text`
    pub fn translate(&self, text: &str, direction: Direction) -> String {
        text.chars().map(|ch| self.convert(ch, direction)).collect()
    }

    /// Whether `ch` is covered by the table on the given side
    pub fn contains(&self, ch: char, direction: Direction) -> bool {
        match direction {
            Direction::HalfToFull => self.to_full.contains_key(&ch),
            Direction::FullToHalf => self.to_half.contains_key(&ch),
        }
    }

    /// Number of character pairs
    pub fn len(&self) -> usize {
        self.to_full.len()
    }

    /// Whether the table has no pairs
    pub fn is_empty(&self) -> bool {
        self.to_full.is_empty()
    }
}

/// Digits 0-9 and Latin A-Z / a-z against U+FF10.., U+FF21.., U+FF41..
pub fn alphanumeric() -> &'static WidthTable {
    ALPHANUMERIC.get_or_init(|| {
        let ranges = [('0', '０', 10u32), ('A', 'Ａ', 26), ('a', 'ａ', 26)];
        WidthTable::from_pairs(ranges.into_iter().flat_map(|(half, full, count)| {
            (0..count).filter_map(move |offset| {
                Some((
                    char::from_u32(half as u32 + offset)?,
                    char::from_u32(full as u32 + offset)?,
                ))
            })
        }))
    })
}

/// ASCII symbols widened before numeral scanning
pub fn punctuation() -> &'static WidthTable {
    PUNCTUATION.get_or_init(|| {
        WidthTable::from_pairs(HALF_PUNCTUATION.chars().zip(FULL_PUNCTUATION.chars()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(alphanumeric().len(), 62);
        assert_eq!(
            punctuation().len(),
            HALF_PUNCTUATION.chars().count(),
            "punctuation sides must be the same length"
        );
        assert_eq!(
            HALF_PUNCTUATION.chars().count(),
            FULL_PUNCTUATION.chars().count()
        );
    }

    #[test]
    fn test_alphanumeric_lookup() {
        let table = alphanumeric();
        assert_eq!(table.convert('7', Direction::HalfToFull), '７');
        assert_eq!(table.convert('Ｚ', Direction::FullToHalf), 'Z');
        assert_eq!(table.convert('ｑ', Direction::FullToHalf), 'q');
        assert_eq!(table.translate("ＡＢＣ１２３", Direction::FullToHalf), "ABC123");
    }

    #[test]
    fn test_outside_domain_is_unchanged() {
        let table = alphanumeric();
        assert_eq!(table.convert('あ', Direction::FullToHalf), 'あ');
        assert_eq!(table.convert('!', Direction::HalfToFull), '!');
        assert!(!table.contains('！', Direction::FullToHalf));
    }

    #[test]
    fn test_punctuation_lookup() {
        let table = punctuation();
        assert_eq!(table.convert('(', Direction::HalfToFull), '（');
        assert_eq!(table.convert('\\', Direction::HalfToFull), '＼');
        assert_eq!(table.convert('~', Direction::HalfToFull), '〜');
        assert_eq!(table.convert('\u{2010}', Direction::HalfToFull), '-');
        // Characters the table leaves alone
        assert_eq!(table.convert('!', Direction::HalfToFull), '!');
        assert_eq!(table.convert(',', Direction::HalfToFull), ',');
    }

    #[test]
    fn test_alphanumeric_round_trip() {
        let table = alphanumeric();
        for ch in ('0'..='9').chain('A'..='Z').chain('a'..='z') {
            let wide = table.convert(ch, Direction::HalfToFull);
            assert_ne!(wide, ch);
            assert_eq!(table.convert(wide, Direction::FullToHalf), ch);
        }
    }

    #[test]
    fn test_tables_are_shared() {
        assert!(std::ptr::eq(alphanumeric(), alphanumeric()));
        assert!(std::ptr::eq(punctuation(), punctuation()));
    }
}
