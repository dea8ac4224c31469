//! 内置函数表
//!
//! 名称到 Function token 的有序开放映射。
//!
//! 匹配策略是**声明顺序优先**（first-match-in-declared-order），
//! 不是最长匹配：扫描器按表的声明顺序逐项做前缀测试，第一个
//! "名称+`(`" 命中的条目获胜。内置集合没有互为前缀的名称，
//! 因此当前两种策略不可区分；扩展表时若加入前缀重叠的名称，
//! 必须保持该顺序约定。

use super::token::Token;

/// 内置函数表（声明顺序即匹配顺序）
static BUILTIN_TABLE: &[(&str, Token)] = &[
    ("cos", Token::Cos),
    ("sin", Token::Sin),
    ("tan", Token::Tan),
    ("ln", Token::Ln),
    ("log", Token::Log),
];

/// 函数表
///
/// 条目顺序即匹配顺序；`register` 在表尾追加新条目
#[derive(Debug, Clone)]
pub struct FunctionTable {
    entries: Vec<(String, Token)>,
}

impl FunctionTable {
    /// 创建仅含内置函数的表
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_TABLE
                .iter()
                .map(|(name, token)| (name.to_string(), token.clone()))
                .collect(),
        }
    }

    /// 创建空表
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 追加一个函数条目（表尾，不去重）
    pub fn register(&mut self, name: impl Into<String>, token: Token) {
        self.entries.push((name.into(), token));
    }

    /// 按声明顺序遍历条目
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.entries
            .iter()
            .map(|(name, token)| (name.as_str(), token))
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 表是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::builtin()
    }
}
