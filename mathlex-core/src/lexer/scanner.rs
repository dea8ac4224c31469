//! 表达式扫描器
//!
//! 单趟、前向、无回溯的词法分析，支持：
//! - 含小数分隔符的数字字面量
//! - 多字符标识符（变量）
//! - 内置函数名（仅当紧跟 `(` 时识别）
//! - 一元/二元 `+`/`-` 消歧

use super::core::{Cursor, SourcePosition, SourceSpan};
use super::error::{ErrorKind, LexError};
use super::functions::FunctionTable;
use super::token::Token;

use mathlex_config::TokenizerConfig;
use serde::Serialize;
use tracing::{debug, trace};

/// 带位置信息的词法单元
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: SourceSpan,
}

impl SpannedToken {
    /// 获取 token 的起始位置
    pub fn start(&self) -> SourcePosition {
        self.span.start
    }

    /// 获取 token 的结束位置
    pub fn end(&self) -> SourcePosition {
        self.span.end
    }
}

/// 表达式扫描器
///
/// 构造后配置不可变；`tokenize` 调用之间不保留任何状态，
/// 同一实例可被多个调用方并发复用
pub struct ExprScanner {
    config: TokenizerConfig,
    functions: FunctionTable,
}

impl ExprScanner {
    /// 创建默认扫描器（`.` 小数分隔符、`,` 参数分隔符、内置函数表）
    pub fn new() -> Self {
        Self::with_config(TokenizerConfig::default())
    }

    /// 使用指定配置创建扫描器
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self::with_table(config, FunctionTable::builtin())
    }

    /// 使用指定配置和函数表创建扫描器
    pub fn with_table(config: TokenizerConfig, functions: FunctionTable) -> Self {
        trace!(target: "mathlex::lexer::scanner", ?config, "Creating new ExprScanner");
        Self { config, functions }
    }

    /// 扫描表达式，返回 token 序列
    ///
    /// 仅在数字字面量无法解析时失败；不校验语法正确性
    pub fn tokenize(&self, expression: &str) -> Result<Vec<Token>, LexError> {
        Ok(self
            .tokenize_spanned(expression)?
            .into_iter()
            .map(|t| t.token)
            .collect())
    }

    /// 扫描表达式，返回带位置信息的 token 序列
    pub fn tokenize_spanned(&self, expression: &str) -> Result<Vec<SpannedToken>, LexError> {
        trace!(target: "mathlex::lexer::scanner", len = expression.len(), "Tokenizing expression");

        let mut cursor = Cursor::new(expression);
        let mut tokens: Vec<SpannedToken> = Vec::new();

        while let Some(c) = cursor.peek(0) {
            let start = cursor.position();

            // 根据首字符分发
            let token = if c.is_ascii_digit() {
                Some(self.scan_number(&mut cursor)?)
            } else if is_identifier_start(c) {
                Some(self.scan_identifier(&mut cursor))
            } else if c == self.config.argument_separator {
                let _ = cursor.advance();
                Some(Token::ArgumentDelimiter)
            } else {
                match c {
                    '+' => {
                        let _ = cursor.advance();
                        Some(self.classify_sign(Token::UnaryPlus, Token::Sum, &tokens))
                    }
                    '-' => {
                        let _ = cursor.advance();
                        Some(self.classify_sign(Token::UnaryMinus, Token::Sub, &tokens))
                    }
                    '*' => self.single_char(&mut cursor, Token::Mult),
                    '/' => self.single_char(&mut cursor, Token::Div),
                    '^' => self.single_char(&mut cursor, Token::Pow),
                    '(' => self.single_char(&mut cursor, Token::LeftBracket),
                    ')' => self.single_char(&mut cursor, Token::RightBracket),

                    // 未识别字符（含空白）：静默丢弃，不产生 token
                    _ => {
                        trace!(target: "mathlex::lexer::scanner",
                            character = %c,
                            line = start.line,
                            column = start.column,
                            "Skipping unrecognized character"
                        );
                        let _ = cursor.advance();
                        None
                    }
                }
            };

            if let Some(token) = token {
                let span = SourceSpan::range(start, cursor.position());
                tokens.push(SpannedToken { token, span });
            }
        }

        trace!(target: "mathlex::lexer::scanner", count = tokens.len(), "Tokenization complete");
        Ok(tokens)
    }

    /// 消费单字符并产出对应 token
    fn single_char(&self, cursor: &mut Cursor, token: Token) -> Option<Token> {
        let _ = cursor.advance();
        Some(token)
    }

    /// 一元/二元符号判定
    ///
    /// 仅依据最后产出的 token：序列为空，或末尾不是操作数
    /// （数值/变量/右括号）时取一元形式
    fn classify_sign(&self, unary: Token, binary: Token, tokens: &[SpannedToken]) -> Token {
        match tokens.last() {
            Some(last) if last.token.ends_operand() => binary,
            _ => unary,
        }
    }

    /// 扫描数字字面量
    ///
    /// 最大匹配：数字与小数分隔符的最长连续串；解析失败
    /// （如串内出现两个分隔符）即整体失败
    fn scan_number(&self, cursor: &mut Cursor) -> Result<Token, LexError> {
        let start = cursor.position();
        let sep = self.config.decimal_separator;
        let run = cursor.take_while(|c| c.is_ascii_digit() || c == sep);

        // 配置的分隔符映射为 '.' 后按十进制浮点解析
        let literal = run.replace(sep, ".");
        match literal.parse::<f64>() {
            Ok(value) => {
                debug!(target: "mathlex::lexer::scanner", %run, value, "Scanned number");
                Ok(Token::Number(value))
            }
            Err(_) => Err(LexError::at(ErrorKind::InvalidNumber(run), start)),
        }
    }

    /// 扫描标识符或函数名
    ///
    /// 先按声明顺序对函数表做 "名称+`(`" 前缀测试，首个命中者
    /// 获胜，只消费名称本身（`(` 留给下一轮产出 LeftBracket）；
    /// 无命中则取最大标识符串产出 Variable
    fn scan_identifier(&self, cursor: &mut Cursor) -> Token {
        for (name, token) in self.functions.entries() {
            if cursor.starts_with(name) && cursor.peek(name.chars().count()) == Some('(') {
                debug!(target: "mathlex::lexer::scanner", function = name, "Matched function name");
                cursor.advance_by(name.chars().count());
                return token.clone();
            }
        }

        let name = cursor.take_while(is_identifier_continue);
        Token::Variable(name)
    }
}

impl Default for ExprScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// 检查字符是否为标识符起始字符
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// 检查字符是否为标识符延续字符
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
