//! Half-width katakana widening
//!
//! Covers the Halfwidth Katakana block U+FF61–U+FF9F: half-width CJK
//! punctuation, katakana, the prolonged sound mark and the two sound marks.
//! ASCII, digits and everything else pass through untouched.

/// Width conversion for characters outside the explicit tables
///
/// The normalizer calls this after narrowing Latin letters and digits, so an
/// implementation must leave ASCII alone.
pub trait WidthConverter {
    /// Return `text` with remaining half-width characters widened
    fn widen(&self, text: &str) -> String;
}

/// Full-width forms for U+FF61..=U+FF9D, indexed by `ch - U+FF61`
const KANA: [char; 61] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン',
];

const FIRST_KANA: u32 = 0xFF61;
const HALF_VOICED_MARK: char = '\u{FF9E}';
const HALF_SEMI_VOICED_MARK: char = '\u{FF9F}';
const COMBINING_VOICED_MARK: char = '\u{3099}';
const COMBINING_SEMI_VOICED_MARK: char = '\u{309A}';
const SPACING_VOICED_MARK: char = '゛';
const SPACING_SEMI_VOICED_MARK: char = '゜';

/// Default [`WidthConverter`] for half-width katakana
///
/// Sound marks that follow a kana able to carry them become combining marks,
/// so "ｶﾞ" widens to "カ\u{3099}": already in canonical decomposed form, like
/// the rest of the normalizer output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfwidthKanaWidener;

impl HalfwidthKanaWidener {
    /// Create a widener
    pub fn new() -> Self {
        Self
    }

    fn widen_char(ch: char) -> Option<char> {
        let code = ch as u32;
        code.checked_sub(FIRST_KANA)
            .and_then(|index| KANA.get(index as usize))
            .copied()
    }
}

/// Kana that take the voiced mark (ガ行, ザ行, ダ行, バ行, ヴ, ヷ, ヺ)
fn takes_voiced_mark(base: char) -> bool {
    matches!(
        base,
        'カ' | 'キ' | 'ク' | 'ケ' | 'コ'
            | 'サ' | 'シ' | 'ス' | 'セ' | 'ソ'
            | 'タ' | 'チ' | 'ツ' | 'テ' | 'ト'
            | 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ'
            | 'ウ' | 'ワ' | 'ヲ'
    )
}

/// Kana that take the semi-voiced mark (パ行)
fn takes_semi_voiced_mark(base: char) -> bool {
    matches!(base, 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ')
}

impl WidthConverter for HalfwidthKanaWidener {
    fn widen(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut previous: Option<char> = None;

        for ch in text.chars() {
            let widened = match ch {
                HALF_VOICED_MARK => match previous {
                    Some(base) if takes_voiced_mark(base) => COMBINING_VOICED_MARK,
                    _ => SPACING_VOICED_MARK,
                },
                HALF_SEMI_VOICED_MARK => match previous {
                    Some(base) if takes_semi_voiced_mark(base) => COMBINING_SEMI_VOICED_MARK,
                    _ => SPACING_SEMI_VOICED_MARK,
                },
                _ => Self::widen_char(ch).unwrap_or(ch),
            };
            out.push(widened);
            previous = Some(widened);
        }

        out
    }
}
