//! Tokenize command implementation

use super::{InputArgs, InputRunner, NormalizationArgs, RunContext};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{document_formatter, open_writer, Content, Document};
use anyhow::{Context, Result};
use clap::Args;
use seiki_core::{CommandAnalyzer, StopWordPolicy, Tokenizer};
use std::path::PathBuf;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub normalization: NormalizationArgs,

    /// Drop stop words
    #[arg(long)]
    pub filtered: bool,

    /// Analyzer executable emitting CoNLL-U (default: ginza or the config value)
    #[arg(long, value_name = "PROGRAM")]
    pub analyzer: Option<String>,

    /// Argument for the analyzer; repeat for several
    #[arg(long = "analyzer-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub analyzer_args: Vec<String>,

    /// Stop-word policy file (default: built-in Japanese policy)
    #[arg(short, long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        log::info!("Starting tokenization");

        let normalizer = self.normalization.normalizer(&context.config.normalization)?;
        let analyzer = self.analyzer(&context.config.analyzer);
        let policy = self.policy(context.config.stop_words.as_ref())?;
        let tokenizer = Tokenizer::with_policy(analyzer, policy);
        log::info!("Using analyzer {}", tokenizer.analyzer().program);

        let sources = resolve_patterns(&self.input.input)?;
        let runner = InputRunner::new(&self.input, context, sources.len())?;

        let documents = runner.run(&sources, |source| {
            let text = FileReader::read_source(source)?;
            let normalized = normalizer.normalize(&text);

            let tokens = if self.filtered {
                tokenizer.analyze_filtered(&normalized)
            } else {
                tokenizer.analyze(&normalized)
            }
            .map_err(|e| CliError::AnalyzerError(e.to_string()))
            .with_context(|| format!("Failed to tokenize {}", source))?;

            log::debug!("{}: {} tokens", source, tokens.len());
            Ok(Document {
                source: source.to_string(),
                content: Content::Tokens { tokens },
            })
        })?;

        let writer = open_writer(self.input.output.as_deref())?;
        let mut formatter = document_formatter(self.input.format, writer);
        for document in &documents {
            formatter.format_item(document)?;
        }
        formatter.finish()?;

        log::info!("Tokenization complete");
        Ok(())
    }

    /// Analyzer from the config with flag overrides
    ///
    /// A new program replaces the configured one together with its arguments.
    pub fn analyzer(&self, configured: &CommandAnalyzer) -> CommandAnalyzer {
        let mut analyzer = match &self.analyzer {
            Some(program) => CommandAnalyzer::new(program.clone()),
            None => configured.clone(),
        };
        if !self.analyzer_args.is_empty() {
            analyzer.args = self.analyzer_args.clone();
        }
        analyzer
    }

    /// Stop-word policy from the flag, the config, or the built-in default
    pub fn policy(&self, configured: Option<&PathBuf>) -> Result<StopWordPolicy> {
        match self.stop_words.as_ref().or(configured) {
            Some(path) => {
                log::debug!("Loading stop words from {}", path.display());
                StopWordPolicy::from_file(path)
                    .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
            }
            None => Ok(StopWordPolicy::japanese()),
        }
    }
}
