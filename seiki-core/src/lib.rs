//! Normalization and tokenization for noisy Japanese news text
//!
//! Article text scraped from the web mixes character widths, line-break
//! conventions and numeral styles. This crate rewrites it into one canonical
//! form and segments it into tokens with a stop-word filter.
//!
//! # Architecture
//!
//! - [`width`]: fixed half-width / full-width tables and the kana widener
//! - [`numeral`]: Kanji numeral runs to Arabic digits
//! - [`whitespace`]: delimiter-aware line-break and space cleanup
//! - [`pipeline`]: the five ordered stages behind [`Normalizer`]
//! - [`tokenizer`]: [`Tokenizer`] over any [`MorphologicalAnalyzer`]; backends
//!   run an external CoNLL-U analyzer or, with the `lindera` feature, IPADIC
//!   in process
//! - [`article`]: the news article record and its normalization
//!
//! Every stage is a pure function of its input and read-only tables, so a
//! single [`Normalizer`] can be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use seiki_core::normalize;
//!
//! let normalized = normalize("ＡＩ関連の記事が二百五十二件。\r\n(速報)");
//! assert_eq!(normalized.as_str(), "AI関連の記事か\u{3099}252件。（速報）");
//! ```

pub mod article;
pub mod error;
pub mod numeral;
pub mod pipeline;
pub mod tokenizer;
pub mod whitespace;
pub mod width;

pub use article::Article;
pub use error::{AnalyzerError, ConfigError, Error, ParseError, Result};
pub use pipeline::{
    normalize, normalize_with_delimiter, NormalizedString, Normalizer, NormalizerConfig, Stage,
    DEFAULT_DELIMITER,
};
pub use tokenizer::{
    CommandAnalyzer, MorphologicalAnalyzer, PartOfSpeech, StopWordPolicy, Token, Tokenizer,
};
#[cfg(feature = "lindera")]
pub use tokenizer::LinderaAnalyzer;
pub use whitespace::WhitespaceCollapser;
pub use width::{Direction, HalfwidthKanaWidener, WidthConverter, WidthTable};
