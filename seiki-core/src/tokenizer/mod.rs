//! Tokenization on top of a pluggable morphological analyzer
//!
//! The analyzer does the segmentation; this module only decides which
//! tokens to keep and what to return.
//!
//! # Example
//!
//! ```rust
//! use seiki_core::tokenizer::{
//!     MorphologicalAnalyzer, PartOfSpeech, Token, TokenStream, Tokenizer,
//! };
//! use seiki_core::AnalyzerError;
//!
//! struct Whitespace;
//!
//! impl MorphologicalAnalyzer for Whitespace {
//!     fn segment<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>, AnalyzerError> {
//!         Ok(Box::new(text.split_whitespace().map(|word| {
//!             Token::new(word, PartOfSpeech::Noun, "名詞", word)
//!         })))
//!     }
//! }
//!
//! let tokenizer = Tokenizer::new(Whitespace);
//! assert_eq!(tokenizer.tokenize("猫 と 犬").unwrap(), vec!["猫", "と", "犬"]);
//! ```

pub mod analyzer;
pub mod command;
pub mod conllu;
pub mod ipadic;
#[cfg(feature = "lindera")]
pub mod lindera;
pub mod policy;
pub mod token;

pub use analyzer::{MorphologicalAnalyzer, TokenStream};
pub use command::CommandAnalyzer;
#[cfg(feature = "lindera")]
pub use self::lindera::LinderaAnalyzer;
pub use policy::{StopWordPolicy, JAPANESE_POLICY_TOML};
pub use token::{PartOfSpeech, Token, UnknownPartOfSpeech};

use crate::error::AnalyzerError;

/// Segments text and applies a [`StopWordPolicy`]
#[derive(Debug, Clone)]
pub struct Tokenizer<A> {
    analyzer: A,
    policy: StopWordPolicy,
}

impl<A: MorphologicalAnalyzer> Tokenizer<A> {
    /// Tokenizer with the default Japanese stop-word policy
    pub fn new(analyzer: A) -> Self {
        Self::with_policy(analyzer, StopWordPolicy::japanese())
    }

    /// Tokenizer with a custom policy
    pub fn with_policy(analyzer: A, policy: StopWordPolicy) -> Self {
        Self { analyzer, policy }
    }

    /// The active policy
    pub fn policy(&self) -> &StopWordPolicy {
        &self.policy
    }

    /// The underlying analyzer
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Full tokens, unfiltered
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
        Ok(self.analyzer.segment(text)?.collect())
    }

    /// Full tokens the policy keeps
    pub fn analyze_filtered(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
        Ok(self
            .analyzer
            .segment(text)?
            .filter(|token| self.policy.allows(token))
            .collect())
    }

    /// Surface forms of every token
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        Ok(self
            .analyzer
            .segment(text)?
            .map(|token| token.surface)
            .collect())
    }

    /// Surface forms of the tokens the policy keeps
    pub fn tokenize_filtered(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        Ok(self
            .analyzer
            .segment(text)?
            .filter(|token| self.policy.allows(token))
            .map(|token| token.surface)
            .collect())
    }
}
