//! Line-break and spacing cleanup around a sentence delimiter
//!
//! Three rules, applied in this order:
//! 1. delimiter, optional spaces, one line break → delimiter
//! 2. every remaining line break (CRLF, LF, CR) → U+3000
//! 3. a run of two or more spaces (U+0020 / U+3000) → one U+3000
//!
//! Rule 1 has to see the raw line breaks, so it runs before rule 2.

use crate::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

/// The full-width space used as the canonical separator
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
static SPACE_RUN: OnceLock<Regex> = OnceLock::new();

fn line_break() -> &'static Regex {
    LINE_BREAK.get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"))
}

fn space_run() -> &'static Regex {
    SPACE_RUN.get_or_init(|| Regex::new("[ \u{3000}]{2,}").expect("space run pattern is valid"))
}

#[inline]
fn is_space(ch: char) -> bool {
    ch == ' ' || ch == IDEOGRAPHIC_SPACE
}

/// Length in bytes of the line break at the start of `rest`, if any
#[inline]
fn line_break_len(rest: &str) -> Option<usize> {
    if rest.starts_with("\r\n") {
        Some(2)
    } else if rest.starts_with('\r') || rest.starts_with('\n') {
        Some(1)
    } else {
        None
    }
}

/// Delimiter-aware whitespace collapser
#[derive(Debug, Clone)]
pub struct WhitespaceCollapser {
    delimiter: char,
    strip_space_after_delimiter: bool,
}

impl Default for WhitespaceCollapser {
    fn default() -> Self {
        Self {
            delimiter: '。',
            strip_space_after_delimiter: false,
        }
    }
}

impl WhitespaceCollapser {
    /// Create a collapser for the given sentence delimiter
    pub fn new(delimiter: char) -> Result<Self, ConfigError> {
        if delimiter.is_whitespace() || delimiter.is_control() {
            return Err(ConfigError::InvalidDelimiter(delimiter));
        }

        Ok(Self {
            delimiter,
            strip_space_after_delimiter: false,
        })
    }

    /// Also drop plain spaces (and any number of line breaks) after the delimiter
    pub fn with_strip_space_after_delimiter(mut self, strip: bool) -> Self {
        self.strip_space_after_delimiter = strip;
        self
    }

    /// The configured delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Apply all three rules
    pub fn collapse(&self, text: &str) -> String {
        let joined = self.join_after_delimiter(text);
        let spaced = line_break().replace_all(&joined, "\u{3000}");
        space_run().replace_all(&spaced, "\u{3000}").into_owned()
    }

    /// Rule 1
    fn join_after_delimiter(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(index) = rest.find(self.delimiter) {
            let after = index + self.delimiter.len_utf8();
            out.push_str(&rest[..after]);
            rest = &rest[after..];
            rest = if self.strip_space_after_delimiter {
                rest.trim_start_matches(|ch: char| is_space(ch) || ch == '\r' || ch == '\n')
            } else {
                let spaces = rest.len() - rest.trim_start_matches(is_space).len();
                match line_break_len(&rest[spaces..]) {
                    Some(len) => &rest[spaces + len..],
                    None => rest,
                }
            };
        }

        out.push_str(rest);
        out
    }
}
