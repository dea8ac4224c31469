//! Mathlex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Mathlex crates.

use serde::{Deserialize, Serialize};

/// Configuration for the expression tokenizer
///
/// Immutable once a scanner is constructed from it. Both separators are
/// single characters; the defaults match the common `3.5` / `log(2,8)`
/// notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Character accepted inside numeric literals as the fractional marker
    pub decimal_separator: char,
    /// Character lexed as the function-argument delimiter
    pub argument_separator: char,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            argument_separator: ',',
        }
    }
}

/// Processing phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("mathlex::{}", self.as_str())
    }
}
