//! Seiki CLI library
//!
//! This library provides the command-line interface for the Seiki
//! normalization and tokenization pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::{Cli, Commands};
pub use error::{CliError, CliResult};
