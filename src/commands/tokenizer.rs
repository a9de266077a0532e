//! Tokenizer strategies for command input.
//!
//! Three interchangeable ways to turn a command string into tokens:
//! - Literal split on a fixed delimiter: `"echo zhao"` with `" "` → `echo`, `zhao`
//! - Regex split on a delimiter pattern: `"echo   zhao"` with `\s+` → `echo`, `zhao`
//! - Regex group extraction: every match of a pattern contributes one capture
//!   group, which lets a single pattern lex keywords, identifiers and numbers
//!   out of a SQL-like statement
//!
//! Empty tokens are dropped. Compiled patterns are cached by pattern string.

use crate::error::{GrammarError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, Mutex};
use tracing::trace;

static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Compiles `pattern`, reusing an earlier compilation of the same string.
///
/// The cache is never evicted: every distinct pattern stays compiled for the
/// life of the process.
fn compile(pattern: &str) -> Result<Regex> {
    let mut cache = PATTERN_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }

    let regex = Regex::new(pattern)
        .map_err(|e| GrammarError::pattern(format!("Invalid pattern '{pattern}': {e}")))?;
    trace!(pattern, "compiled tokenizer pattern");
    cache.insert(pattern.to_string(), regex.clone());
    Ok(regex)
}

/// Returns true if `pattern` has already been compiled.
pub fn is_cached(pattern: &str) -> bool {
    PATTERN_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .contains_key(pattern)
}

/// Which tokenizer strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// Split on a fixed substring.
    Literal,
    /// Split on matches of a regex.
    Regex,
    /// Collect the given capture group of every regex match.
    RegexGroup(usize),
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal => write!(f, "literal"),
            Self::Regex => write!(f, "regex"),
            Self::RegexGroup(group) => write!(f, "regex_group({group})"),
        }
    }
}

/// A configured tokenizer.
#[derive(Debug, Clone)]
pub enum Tokenizer {
    /// Split on a fixed substring.
    Literal(String),
    /// Split on matches of a regex.
    Regex(Regex),
    /// Collect capture group `group` of every match.
    RegexGroup { regex: Regex, group: usize },
}

impl Tokenizer {
    /// Builds a tokenizer of the given kind from its pattern or delimiter.
    pub fn new(kind: TokenizerKind, pattern: &str) -> Result<Self> {
        match kind {
            TokenizerKind::Literal => Self::literal(pattern),
            TokenizerKind::Regex => Self::regex(pattern),
            TokenizerKind::RegexGroup(group) => Self::regex_group(pattern, group),
        }
    }

    /// Literal-delimiter split.
    pub fn literal(delimiter: &str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(GrammarError::pattern("Literal delimiter must not be empty"));
        }
        Ok(Self::Literal(delimiter.to_string()))
    }

    /// Regex-delimiter split.
    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(Self::Regex(compile(pattern)?))
    }

    /// Regex-group extraction.
    pub fn regex_group(pattern: &str, group: usize) -> Result<Self> {
        let regex = compile(pattern)?;
        // captures_len counts the implicit whole-match group 0
        if group >= regex.captures_len() {
            return Err(GrammarError::pattern(format!(
                "Pattern '{pattern}' has no capture group {group}"
            )));
        }
        Ok(Self::RegexGroup { regex, group })
    }

    pub fn kind(&self) -> TokenizerKind {
        match self {
            Self::Literal(_) => TokenizerKind::Literal,
            Self::Regex(_) => TokenizerKind::Regex,
            Self::RegexGroup { group, .. } => TokenizerKind::RegexGroup(*group),
        }
    }

    /// The delimiter or pattern this tokenizer was built from.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Literal(delimiter) => delimiter,
            Self::Regex(regex) | Self::RegexGroup { regex, .. } => regex.as_str(),
        }
    }

    /// Tokenizes a command string.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        match self {
            Self::Literal(delimiter) => collect(input.split(delimiter.as_str())),
            Self::Regex(regex) => collect(regex.split(input)),
            Self::RegexGroup { regex, group } => collect(
                regex
                    .captures_iter(input)
                    .filter_map(|caps| caps.get(*group))
                    .map(|m| m.as_str()),
            ),
        }
    }
}

fn collect<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
