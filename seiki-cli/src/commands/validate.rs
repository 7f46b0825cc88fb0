//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use seiki_core::StopWordPolicy;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the stop-word policy file to validate
    #[arg(short = 's', long, value_name = "FILE", required = true)]
    pub stop_words: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating stop-word policy: {}", self.stop_words.display());

        match StopWordPolicy::from_file(&self.stop_words) {
            Ok(policy) => {
                println!("✓ Policy is valid!");
                println!("  Excluded parts of speech: {}", policy.excluded_pos().len());
                println!("  Excluded lemmas: {}", policy.excluded_lemmas().len());
                println!("  Excluded surfaces: {}", policy.excluded_surfaces().len());
                if let Some(marker) = policy.bound_form_marker() {
                    println!("  Bound-form marker: {marker}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Policy is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(format!("Validation failed: {e}")).into())
            }
        }
    }
}
