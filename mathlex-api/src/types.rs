//! API 类型定义
//!
//! 词法分析的输入输出类型。

use mathlex_core::{SpannedToken, Token};
use serde::Serialize;

/// 词法分析输出
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeOutput {
    /// 带位置信息的 token 序列
    pub tokens: Vec<SpannedToken>,
}

impl TokenizeOutput {
    /// 丢弃位置信息，返回裸 token 序列
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens.into_iter().map(|t| t.token).collect()
    }

    /// token 数量
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// 序列是否为空
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
