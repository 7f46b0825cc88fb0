//! In-process analyzer over lindera with the embedded IPADIC dictionary
//!
//! Normalized text is in NFD, which IPADIC does not segment well, so the
//! text is composed before analysis and surfaces and lemmas are decomposed
//! again on the way out.
//!
//! IPADIC marks bound forms as `非自立` rather than UniDic's `非自立可能`;
//! pair this analyzer with a policy whose `bound_form_marker` matches.

use super::analyzer::{MorphologicalAnalyzer, TokenStream};
use super::ipadic;
use super::token::Token;
use crate::error::AnalyzerError;
use ::lindera::dictionary::{load_dictionary_from_kind, DictionaryKind};
use ::lindera::mode::Mode;
use ::lindera::segmenter::Segmenter;
use ::lindera::tokenizer::Tokenizer as LinderaTokenizer;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

const NAME: &str = "lindera";

/// [`MorphologicalAnalyzer`] backed by lindera and IPADIC
pub struct LinderaAnalyzer {
    tokenizer: LinderaTokenizer,
}

impl fmt::Debug for LinderaAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinderaAnalyzer").finish_non_exhaustive()
    }
}

impl LinderaAnalyzer {
    /// Load the embedded IPADIC dictionary
    pub fn new() -> Result<Self, AnalyzerError> {
        let dictionary =
            load_dictionary_from_kind(DictionaryKind::IPADIC).map_err(|e| backend_error(&e))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        log::debug!("loaded lindera IPADIC dictionary");

        Ok(Self {
            tokenizer: LinderaTokenizer::new(segmenter),
        })
    }
}

fn backend_error(error: &dyn fmt::Display) -> AnalyzerError {
    AnalyzerError::Backend {
        analyzer: NAME.to_string(),
        reason: error.to_string(),
    }
}

impl MorphologicalAnalyzer for LinderaAnalyzer {
    fn segment<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>, AnalyzerError> {
        let composed: String = text.nfc().collect();
        let mut analyzed = self
            .tokenizer
            .tokenize(&composed)
            .map_err(|e| backend_error(&e))?;

        let tokens: Vec<Token> = analyzed
            .iter_mut()
            .map(|token| {
                let surface = token.text.to_string();
                let details = token.details();
                let mut token = ipadic::token_from_details(&surface, &details);
                token.surface = token.surface.nfd().collect();
                token.lemma = token.lemma.nfd().collect();
                token
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }
}
