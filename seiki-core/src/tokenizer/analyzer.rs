//! The morphological analyzer capability

use super::token::Token;
use crate::error::AnalyzerError;

/// Boxed token stream returned by an analyzer
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// A morphological analyzer backend
///
/// `segment` returns the tokens covering `text` in order. Calling it again
/// with the same text starts a fresh stream.
pub trait MorphologicalAnalyzer {
    /// Segment `text` into tokens
    fn segment<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>, AnalyzerError>;
}

impl<A: MorphologicalAnalyzer + ?Sized> MorphologicalAnalyzer for &A {
    fn segment<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>, AnalyzerError> {
        (**self).segment(text)
    }
}

impl<A: MorphologicalAnalyzer + ?Sized> MorphologicalAnalyzer for Box<A> {
    fn segment<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>, AnalyzerError> {
        (**self).segment(text)
    }
}

impl<A: MorphologicalAnalyzer + ?Sized> MorphologicalAnalyzer for std::sync::Arc<A> {
    fn segment<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>, AnalyzerError> {
        (**self).segment(text)
    }
}
