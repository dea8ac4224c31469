//! Mathlex API - Tokenization orchestration layer
//!
//! Provides the unified tokenization interface, including:
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (MathlexError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `tokenize(expression, &config)` API.

use tracing::{debug, info};

use mathlex_core::ExprScanner;

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ErrorReport, LexError, MathlexError};
pub use types::TokenizeOutput;

// Re-export core types
pub use mathlex_config;
pub use mathlex_core::{
    ErrorKind, FunctionTable, Phase, SourcePosition, SourceSpan, SpannedToken, Token,
    TokenCategory, TokenizerConfig,
};

/// Tokenize with explicit configuration
///
/// This is the recommended API for library users.
pub fn tokenize(expression: &str, config: &RunConfig) -> Result<TokenizeOutput, MathlexError> {
    info!(target: "mathlex::api", len = expression.len(), "Starting tokenization");

    let scanner = ExprScanner::with_table(config.tokenizer, config.functions.clone());
    let tokens = scanner.tokenize_spanned(expression)?;

    debug!(target: "mathlex::api", count = tokens.len(), "Tokenization completed");
    Ok(TokenizeOutput { tokens })
}

/// Tokenize with the global configuration (CLI convenience)
pub fn tokenize_with_global(expression: &str) -> Result<TokenizeOutput, MathlexError> {
    tokenize(expression, &config::config())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_default_config() {
        let output = tokenize("1+2", &RunConfig::default()).unwrap();
        assert_eq!(
            output.into_tokens(),
            vec![Token::Number(1.0), Token::Sum, Token::Number(2.0)]
        );
    }

    #[test]
    fn test_tokenize_reports_error() {
        let err = tokenize("1.2.3", &RunConfig::default()).unwrap_err();
        assert_eq!(err.phase(), "lexer");
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.column(), Some(1));
    }

    #[test]
    fn test_tokenize_custom_separators() {
        let config = RunConfig::with_separators(',', ';');
        let output = tokenize("log(2,5;8)", &config).unwrap();
        let tokens = output.into_tokens();

        assert_eq!(tokens[2], Token::Number(2.5));
        assert_eq!(tokens[3], Token::ArgumentDelimiter);
    }

    #[test]
    fn test_output_spans() {
        let output = tokenize("cos(x)", &RunConfig::default()).unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(output.tokens[0].span.start.column, 1);
        assert_eq!(output.tokens[0].span.end.column, 4);
    }
}
