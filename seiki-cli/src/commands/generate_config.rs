//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use seiki_core::tokenizer::JAPANESE_POLICY_TOML;
use std::fs;
use std::path::PathBuf;

/// Kinds of configuration templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKind {
    /// CLI configuration (normalization, analyzer, performance)
    Cli,
    /// Stop-word policy with the built-in Japanese defaults
    StopWords,
}

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Template to generate
    #[arg(short, long, value_enum, default_value = "cli")]
    pub kind: ConfigKind,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Kind: {:?}", self.kind);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        match self.kind {
            ConfigKind::Cli => {
                println!("1. Edit the delimiter, analyzer and thread settings");
                println!("2. Use it for processing:");
                println!(
                    "   seiki --config {} normalize -i input.txt",
                    self.output.display()
                );
            }
            ConfigKind::StopWords => {
                println!("1. Edit the excluded parts of speech, lemmas and surfaces");
                println!("2. Validate your policy:");
                println!("   seiki validate --stop-words {}", self.output.display());
                println!("3. Use it for tokenization:");
                println!(
                    "   seiki tokenize -i input.txt --filtered --stop-words {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        match self.kind {
            ConfigKind::Cli => Ok(format!(
                "# Seiki CLI configuration\n\
                 #\n\
                 # Path to a stop-word policy (default: built-in Japanese policy)\n\
                 # stop_words = \"stop_words.toml\"\n\n{}",
                CliConfig::default().to_toml()?
            )),
            ConfigKind::StopWords => Ok(JAPANESE_POLICY_TOML.to_string()),
        }
    }
}
