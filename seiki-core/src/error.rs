//! Layered error types
//!
//! Normalization itself never fails: a numeral run that cannot be parsed is
//! left as it was. Only configuration and the external analyzer surface
//! errors to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to convert a Kanji numeral run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The run was empty
    #[error("empty numeral run")]
    Empty,

    /// A character outside the Kanji numeral alphabet
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Character index inside the run
        position: usize,
    },

    /// The value does not fit in 64 bits
    #[error("numeral value overflows u64")]
    Overflow,
}

/// Invalid normalizer or stop-word configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The sentence delimiter cannot be whitespace or a control character
    #[error("invalid sentence delimiter {0:?}")]
    InvalidDelimiter(char),

    /// A configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML could not be produced
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Parsed but semantically wrong
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failure of the external morphological analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The analyzer could not be reached at all
    #[error("morphological analyzer '{program}' is unavailable: {source}")]
    Unavailable {
        /// The program that was invoked
        program: String,
        /// Why it could not be started or talked to
        #[source]
        source: std::io::Error,
    },

    /// The analyzer ran but reported failure
    #[error("morphological analyzer '{program}' failed ({status}): {stderr}")]
    Failed {
        /// The program that was invoked
        program: String,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The analyzer produced output that could not be read as tokens
    #[error("malformed analyzer output at line {line}: {reason}")]
    MalformedOutput {
        /// 1-based line number in the analyzer output
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// An in-process analyzer reported an error
    #[error("morphological analyzer '{analyzer}' failed: {reason}")]
    Backend {
        /// Analyzer name
        analyzer: String,
        /// Error reported by the analyzer
        reason: String,
    },
}

/// Crate-level error
#[derive(Error, Debug)]
pub enum Error {
    /// Numeral parsing error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Analyzer error
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;
