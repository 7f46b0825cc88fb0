//! Kanji numeral to Arabic numeral conversion
//!
//! A run of Kanji numeral characters is read one of two ways:
//! - **Sequential**: only the digits 〇–九, each replaced independently
//!   ("二五二" → "252")
//! - **Positional**: at least one unit marker (十百千万億兆) is present and the
//!   run is read with place values ("二百五十二" → "252")
//!
//! The choice depends only on alphabet membership, so "十" is positional and
//! yields "10".

use crate::error::ParseError;
use regex::Regex;
use std::sync::OnceLock;

/// The Kanji numeral alphabet
pub const KANJI_NUMERALS: &str = "〇一二三四五六七八九十百千万億兆";

static NUMERAL_RUN: OnceLock<Regex> = OnceLock::new();

fn numeral_run() -> &'static Regex {
    NUMERAL_RUN.get_or_init(|| {
        Regex::new(&format!("[{KANJI_NUMERALS}]+")).expect("numeral run pattern is valid")
    })
}

/// How a numeral run is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralForm {
    /// Digits only, substituted one by one
    Sequential,
    /// Place-value notation
    Positional,
}

/// One character of the numeral alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Digit(u64),
    /// 十, 百, 千
    SmallUnit(u64),
    /// 万, 億, 兆
    LargeUnit(u64),
}

fn symbol(ch: char) -> Option<Symbol> {
    let symbol = match ch {
        '〇' => Symbol::Digit(0),
        '一' => Symbol::Digit(1),
        '二' => Symbol::Digit(2),
        '三' => Symbol::Digit(3),
        '四' => Symbol::Digit(4),
        '五' => Symbol::Digit(5),
        '六' => Symbol::Digit(6),
        '七' => Symbol::Digit(7),
        '八' => Symbol::Digit(8),
        '九' => Symbol::Digit(9),
        '十' => Symbol::SmallUnit(10),
        '百' => Symbol::SmallUnit(100),
        '千' => Symbol::SmallUnit(1_000),
        '万' => Symbol::LargeUnit(10_000),
        '億' => Symbol::LargeUnit(100_000_000),
        '兆' => Symbol::LargeUnit(1_000_000_000_000),
        _ => return None,
    };
    Some(symbol)
}

fn symbols(run: &str) -> Result<Vec<Symbol>, ParseError> {
    if run.is_empty() {
        return Err(ParseError::Empty);
    }

    run.chars()
        .enumerate()
        .map(|(position, character)| {
            symbol(character).ok_or(ParseError::UnexpectedCharacter {
                character,
                position,
            })
        })
        .collect()
}

fn form_of(symbols: &[Symbol]) -> NumeralForm {
    if symbols.iter().all(|s| matches!(s, Symbol::Digit(_))) {
        NumeralForm::Sequential
    } else {
        NumeralForm::Positional
    }
}

/// Classify a numeral run without converting it
pub fn classify(run: &str) -> Result<NumeralForm, ParseError> {
    symbols(run).map(|symbols| form_of(&symbols))
}

/// Convert a numeral run to its decimal string
pub fn to_arabic(run: &str) -> Result<String, ParseError> {
    let symbols = symbols(run)?;

    match form_of(&symbols) {
        NumeralForm::Sequential => Ok(symbols
            .iter()
            .filter_map(|s| match s {
                Symbol::Digit(d) => char::from_digit(*d as u32, 10),
                _ => None,
            })
            .collect()),
        NumeralForm::Positional => positional_value(&symbols).map(|value| value.to_string()),
    }
}

/// Place-value reading
///
/// `pending` collects bare digits, `group` the small-unit terms since the last
/// large unit, `total` the finished large-unit groups.
fn positional_value(symbols: &[Symbol]) -> Result<u64, ParseError> {
    let mut total: u64 = 0;
    let mut group: u64 = 0;
    let mut pending: Option<u64> = None;

    for symbol in symbols {
        match *symbol {
            Symbol::Digit(d) => {
                let value = match pending {
                    Some(p) => p.checked_mul(10).and_then(|v| v.checked_add(d)),
                    None => Some(d),
                };
                pending = Some(value.ok_or(ParseError::Overflow)?);
            }
            Symbol::SmallUnit(unit) => {
                let term = pending.take().unwrap_or(1).checked_mul(unit);
                group = term
                    .and_then(|t| group.checked_add(t))
                    .ok_or(ParseError::Overflow)?;
            }
            Symbol::LargeUnit(unit) => {
                let mut amount = group
                    .checked_add(pending.take().unwrap_or(0))
                    .ok_or(ParseError::Overflow)?;
                if amount == 0 {
                    amount = 1;
                }
                total = amount
                    .checked_mul(unit)
                    .and_then(|v| total.checked_add(v))
                    .ok_or(ParseError::Overflow)?;
                group = 0;
            }
        }
    }

    total
        .checked_add(group)
        .and_then(|v| v.checked_add(pending.unwrap_or(0)))
        .ok_or(ParseError::Overflow)
}

/// Replace every maximal numeral run in `text` with Arabic digits
///
/// A run that cannot be converted is kept as it is.
pub fn replace_numerals(text: &str) -> String {
    numeral_run()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let run = &caps[0];
            match to_arabic(run) {
                Ok(converted) => converted,
                Err(e) => {
                    log::trace!("leaving numeral run {run:?} unconverted: {e}");
                    run.to_string()
                }
            }
        })
        .into_owned()
}
