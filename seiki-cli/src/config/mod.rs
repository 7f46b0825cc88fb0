//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use seiki_core::{CommandAnalyzer, NormalizerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Stop-word policy file (default: built-in Japanese policy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<PathBuf>,

    /// Normalization configuration
    #[serde(default)]
    pub normalization: NormalizerConfig,

    /// External morphological analyzer
    #[serde(default)]
    pub analyzer: CommandAnalyzer,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    #[serde(default)]
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
