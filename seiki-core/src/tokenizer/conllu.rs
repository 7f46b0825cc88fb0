//! CoNLL-U reader
//!
//! Reads the ten-column CoNLL-U format many analyzers (GiNZA, UDPipe, Stanza)
//! emit:
//!
//! ```text
//! ID  FORM  LEMMA  UPOS  XPOS  FEATS  HEAD  DEPREL  DEPS  MISC
//! ```
//!
//! Only FORM, LEMMA, UPOS and XPOS are used. Comment lines, sentence-break
//! blank lines, multi-word ranges ("1-2") and empty nodes ("3.1") are skipped.

use super::token::{PartOfSpeech, Token};
use crate::error::AnalyzerError;

const COLUMNS: usize = 10;

/// Parse CoNLL-U text into tokens, in document order
pub fn parse(input: &str) -> Result<Vec<Token>, AnalyzerError> {
    let mut tokens = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if let Some(token) = parse_line(line, index + 1)? {
            tokens.push(token);
        }
    }

    Ok(tokens)
}

fn parse_line(line: &str, line_number: usize) -> Result<Option<Token>, AnalyzerError> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != COLUMNS {
        return Err(malformed(
            line_number,
            format!("expected {COLUMNS} tab-separated columns, found {}", fields.len()),
        ));
    }

    let id = fields[0];
    if id.contains('-') || id.contains('.') {
        return Ok(None);
    }
    if id.parse::<u32>().is_err() {
        return Err(malformed(line_number, format!("invalid token id '{id}'")));
    }

    let part_of_speech: PartOfSpeech = fields[3]
        .parse()
        .map_err(|e| malformed(line_number, format!("{e}")))?;

    Ok(Some(Token {
        surface: fields[1].to_string(),
        part_of_speech,
        tag: none_if_underscore(fields[4]).to_string(),
        lemma: none_if_underscore(fields[2]).to_string(),
    }))
}

/// CoNLL-U writes "_" for an unspecified field
fn none_if_underscore(field: &str) -> &str {
    if field == "_" {
        ""
    } else {
        field
    }
}

fn malformed(line: usize, reason: String) -> AnalyzerError {
    AnalyzerError::MalformedOutput { line, reason }
}
