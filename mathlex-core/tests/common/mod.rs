//! 测试辅助工具
//!
//! 提供端到端词法分析的辅助函数

use mathlex_core::{ExprScanner, LexError, Token, TokenizerConfig};

/// 用默认配置扫描表达式并返回 token 序列
pub fn lex(expression: &str) -> Result<Vec<Token>, LexError> {
    ExprScanner::new().tokenize(expression)
}

/// 用指定配置扫描表达式并返回 token 序列
pub fn lex_with(config: TokenizerConfig, expression: &str) -> Result<Vec<Token>, LexError> {
    ExprScanner::with_config(config).tokenize(expression)
}
