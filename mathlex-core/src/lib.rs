//! Mathlex Core - Expression scanner (pure logic, no IO)
//!
//! Contains the lexical analyzer for mathematical expressions.
//! Only operates on in-memory strings, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod lexer;

// Re-export common types
pub use lexer::{
    ErrorKind, ExprScanner, FunctionTable, LexError, SourcePosition, SourceSpan, SpannedToken,
    Token, TokenCategory,
};

// Re-export config types from mathlex-config
pub use mathlex_config::{Phase, TokenizerConfig};
