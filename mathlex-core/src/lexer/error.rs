//! 词法错误类型
//!
//! 提供结构化的词法错误信息，包含错误类型、位置和详细消息。

use super::core::SourcePosition;

/// 错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// 数字格式错误（如一个连续串内出现两个小数分隔符）
    InvalidNumber(String),
    /// 未识别字符
    ///
    /// 默认扫描路径*不会*抛出该错误：未识别字符（含空白）被静默
    /// 消费丢弃。该变体的存在把这种宽容行为固定为显式契约，
    /// 而不是实现疏漏。
    UnknownChar(char),
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 错误发生的位置
    pub position: SourcePosition,
    /// 详细错误消息
    pub message: String,
}

impl LexError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, position: SourcePosition) -> Self {
        let message = Self::format_message(&kind, position);
        Self {
            kind,
            position,
            message,
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 格式化错误消息
    fn format_message(kind: &ErrorKind, position: SourcePosition) -> String {
        match kind {
            ErrorKind::InvalidNumber(run) => {
                format!(
                    "Invalid number literal '{}' at {}:{}",
                    run, position.line, position.column
                )
            }
            ErrorKind::UnknownChar(c) => {
                format!(
                    "Unknown character '{}' at {}:{}",
                    c, position.line, position.column
                )
            }
        }
    }
}
