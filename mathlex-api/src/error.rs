//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

/// 词法错误（结构化）
pub use mathlex_core::LexError;

/// Mathlex 错误类型
#[derive(Error, Debug, Clone)]
pub enum MathlexError {
    /// 词法分析错误（结构化）
    #[error("{0}")]
    Lexer(#[from] LexError),
}

impl MathlexError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            MathlexError::Lexer(e) => Some(e.line()),
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            MathlexError::Lexer(e) => Some(e.column()),
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            MathlexError::Lexer(_) => "lexer",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// 适用于工具集成等需要结构化数据的场景。
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            MathlexError::Lexer(e) => ErrorReport {
                phase: "lexer",
                line: Some(e.line()),
                column: Some(e.column()),
                error_kind: format!("{:?}", e.kind),
                message: e.message.clone(),
            },
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// 出错阶段
    pub phase: &'static str,
    /// 行号（1-based）
    pub line: Option<usize>,
    /// 列号（1-based）
    pub column: Option<usize>,
    /// 错误类型（Debug 形式）
    pub error_kind: String,
    /// 人类可读消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] ", self.phase)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, "{}:{} ", line, column)?;
        }
        write!(f, "{}", self.message)
    }
}
