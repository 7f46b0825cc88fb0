//! CLI command implementations

use crate::config::{CliConfig, PerformanceConfig};
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use seiki_core::{Normalizer, NormalizerConfig};
use std::path::PathBuf;

pub mod generate_config;
pub mod normalize;
pub mod tokenize;
pub mod validate;

/// Normalize and tokenize Japanese news text
#[derive(Debug, Parser)]
#[command(name = "seiki", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize text files or article records
    Normalize(normalize::NormalizeArgs),

    /// Normalize, then segment with the morphological analyzer
    Tokenize(tokenize::TokenizeArgs),

    /// Check a stop-word policy file
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// State shared by the processing commands
#[derive(Debug, Default)]
pub struct RunContext {
    /// Loaded configuration file, or defaults
    pub config: CliConfig,
    /// Whether progress output is suppressed
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Normalize(args) => args.execute(&self.context()?),
            Commands::Tokenize(args) => args.execute(&self.context()?),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }

    fn context(&self) -> Result<RunContext> {
        Ok(RunContext {
            config: CliConfig::load(self.config.as_deref())?,
            quiet: self.quiet,
        })
    }
}

/// Input, output and scheduling arguments shared by processing commands
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Process inputs in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (implies --parallel)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Normalization overrides shared by processing commands
#[derive(Debug, Args)]
pub struct NormalizationArgs {
    /// Sentence delimiter (default: 。 or the config value)
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Drop every space and line break after the delimiter
    #[arg(long)]
    pub strip_space_after_delimiter: bool,
}

impl NormalizationArgs {
    /// Apply the flags on top of the configured values
    pub fn resolve(&self, base: &NormalizerConfig) -> NormalizerConfig {
        NormalizerConfig {
            delimiter: self.delimiter.unwrap_or(base.delimiter),
            strip_space_after_delimiter: self.strip_space_after_delimiter
                || base.strip_space_after_delimiter,
        }
    }

    /// Build the normalizer
    pub fn normalizer(&self, base: &NormalizerConfig) -> Result<Normalizer> {
        let config = self.resolve(base);
        log::debug!("Normalizer configuration: {:?}", config);
        Normalizer::new(config).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Worker count: flag, then config, then CPU count
pub fn worker_threads(flag: Option<usize>, config: &PerformanceConfig) -> usize {
    flag.filter(|&n| n > 0)
        .or((config.worker_threads > 0).then_some(config.worker_threads))
        .unwrap_or_else(num_cpus::get)
}

/// Runs a per-input job sequentially or on a dedicated rayon pool
pub struct InputRunner {
    pool: Option<rayon::ThreadPool>,
    progress: ProgressReporter,
}

impl InputRunner {
    /// Prepare a runner for `total_inputs` inputs
    pub fn new(args: &InputArgs, context: &RunContext, total_inputs: usize) -> Result<Self> {
        let pool = if args.parallel || args.threads.is_some() {
            let threads = worker_threads(args.threads, &context.config.performance);
            log::info!("Using {} worker threads", threads);
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to build thread pool")?,
            )
        } else {
            None
        };

        let mut progress = ProgressReporter::new(context.quiet);
        progress.init_inputs(total_inputs as u64);

        Ok(Self { pool, progress })
    }

    /// Apply `job` to every source, keeping input order
    pub fn run<T, F>(&self, sources: &[InputSource], job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&InputSource) -> Result<T> + Send + Sync,
    {
        let run_one = |source: &InputSource| {
            let result = job(source);
            self.progress.input_completed(&source.to_string());
            result
        };

        let results = match &self.pool {
            Some(pool) => pool.install(|| sources.par_iter().map(run_one).collect()),
            None => sources.iter().map(run_one).collect(),
        };
        self.progress.finish();
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_normalize() {
        let cli = Cli::try_parse_from([
            "seiki", "-vv", "normalize", "-i", "a.txt", "-i", "*.txt", "-d", "．", "-f", "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Normalize(args) => {
                assert_eq!(args.input.input, vec!["a.txt", "*.txt"]);
                assert_eq!(args.input.format, OutputFormat::Json);
                assert_eq!(args.normalization.delimiter, Some('．'));
                assert!(!args.articles);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_tokenize_with_analyzer_args() {
        let cli = Cli::try_parse_from([
            "seiki",
            "tokenize",
            "-i",
            "-",
            "--filtered",
            "--analyzer",
            "ginza",
            "--analyzer-arg",
            "-m",
            "--analyzer-arg",
            "ja_ginza",
            "-q",
        ])
        .unwrap();

        assert!(cli.quiet);
        match cli.command {
            Commands::Tokenize(args) => {
                assert!(args.filtered);
                assert_eq!(args.analyzer_args, vec!["-m", "ja_ginza"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["seiki", "normalize"]).is_err());
    }

    #[test]
    fn test_normalization_flags_override_config() {
        let base = NormalizerConfig {
            delimiter: '．',
            strip_space_after_delimiter: true,
        };
        let args = NormalizationArgs {
            delimiter: Some('。'),
            strip_space_after_delimiter: false,
        };

        let resolved = args.resolve(&base);
        assert_eq!(resolved.delimiter, '。');
        assert!(resolved.strip_space_after_delimiter);

        let args = NormalizationArgs {
            delimiter: None,
            strip_space_after_delimiter: false,
        };
        assert_eq!(args.resolve(&base).delimiter, '．');
    }

    #[test]
    fn test_invalid_delimiter_is_config_error() {
        let args = NormalizationArgs {
            delimiter: Some(' '),
            strip_space_after_delimiter: false,
        };
        let err = args.normalizer(&NormalizerConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_worker_threads_precedence() {
        let config = PerformanceConfig { worker_threads: 3 };
        assert_eq!(worker_threads(Some(2), &config), 2);
        assert_eq!(worker_threads(None, &config), 3);
        assert_eq!(worker_threads(Some(0), &config), 3);
        assert_eq!(
            worker_threads(None, &PerformanceConfig::default()),
            num_cpus::get()
        );
    }

    #[test]
    fn test_runner_keeps_order() {
        let args = InputArgs {
            input: Vec::new(),
            output: None,
            format: OutputFormat::Text,
            parallel: false,
            threads: Some(2),
        };
        let context = RunContext {
            quiet: true,
            ..RunContext::default()
        };
        let sources: Vec<InputSource> = (0..20)
            .map(|n| InputSource::File(PathBuf::from(format!("{n}.txt"))))
            .collect();

        let runner = InputRunner::new(&args, &context, sources.len()).unwrap();
        let names = runner.run(&sources, |source| Ok(source.to_string())).unwrap();
        assert_eq!(names[0], "0.txt");
        assert_eq!(names[19], "19.txt");
    }

    #[test]
    fn test_runner_propagates_errors() {
        let args = InputArgs {
            input: Vec::new(),
            output: None,
            format: OutputFormat::Text,
            parallel: false,
            threads: None,
        };
        let runner = InputRunner::new(&args, &RunContext::default(), 1).unwrap();
        let result: Result<Vec<()>> =
            runner.run(&[InputSource::Stdin], |_| anyhow::bail!("boom"));
        assert!(result.is_err());
    }
}
