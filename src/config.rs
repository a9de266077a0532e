//! Configuration management for cmdtree.
//!
//! Loads dispatcher settings (tokenizer strategy, pattern, capture group) from
//! a TOML file. A missing file yields the defaults: regex split on `\s+`.

use crate::commands::tokenizer::{Tokenizer, TokenizerKind};
use crate::error::{GrammarError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for cmdtree.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Dispatcher settings.
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
}

/// Tokenizer strategy names as they appear in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Split on a fixed delimiter.
    Literal,
    /// Split on a regex.
    #[default]
    Regex,
    /// Extract one capture group per regex match.
    RegexGroup,
}

/// Dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Tokenizer strategy.
    #[serde(default)]
    pub strategy: Strategy,

    /// Delimiter (literal) or regex pattern.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Capture group extracted by the `regex_group` strategy.
    #[serde(default = "default_group")]
    pub group: usize,
}

fn default_pattern() -> String {
    r"\s+".to_string()
}

fn default_group() -> usize {
    1
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            pattern: default_pattern(),
            group: default_group(),
        }
    }
}

impl DispatcherConfig {
    /// The tokenizer kind this configuration selects.
    pub fn kind(&self) -> TokenizerKind {
        match self.strategy {
            Strategy::Literal => TokenizerKind::Literal,
            Strategy::Regex => TokenizerKind::Regex,
            Strategy::RegexGroup => TokenizerKind::RegexGroup(self.group),
        }
    }

    /// Builds the configured tokenizer.
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Tokenizer::new(self.kind(), &self.pattern)
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cmdtree")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GrammarError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            GrammarError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
