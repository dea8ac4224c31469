//! Mathlex Token 类型定义

use serde::{Deserialize, Serialize};

/// 词法单元
///
/// 封闭的标签联合体，按类别分组。操作数携带负载（数值/变量名），
/// 其余变体为纯标记。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    // 操作数
    Number(f64),
    Variable(String),

    // 运算符（Sum/Sub 是二元 +/-；UnaryPlus/UnaryMinus 是前缀形式）
    UnaryPlus,
    UnaryMinus,
    Sum,
    Sub,
    Mult,
    Div,
    Pow,

    // 函数（ArgumentDelimiter 分隔函数调用参数）
    Cos,
    Sin,
    Tan,
    Ln,
    Log,
    ArgumentDelimiter,

    // 括号
    LeftBracket,
    RightBracket,
}

/// Token 类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenCategory {
    Operand,
    Operator,
    Function,
    Bracket,
}

impl Token {
    /// 获取 token 类别
    pub fn category(&self) -> TokenCategory {
        match self {
            Token::Number(_) | Token::Variable(_) => TokenCategory::Operand,
            Token::UnaryPlus
            | Token::UnaryMinus
            | Token::Sum
            | Token::Sub
            | Token::Mult
            | Token::Div
            | Token::Pow => TokenCategory::Operator,
            Token::Cos
            | Token::Sin
            | Token::Tan
            | Token::Ln
            | Token::Log
            | Token::ArgumentDelimiter => TokenCategory::Function,
            Token::LeftBracket | Token::RightBracket => TokenCategory::Bracket,
        }
    }

    /// 该 token 是否终结一个操作数
    ///
    /// 一元/二元符号判定的唯一依据：`+`/`-` 前面若是
    /// 数值、变量或右括号，则为二元运算符，否则为前缀符号
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Variable(_) | Token::RightBracket
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable(name) => write!(f, "{}", name),
            Token::UnaryPlus => write!(f, "+u"),
            Token::UnaryMinus => write!(f, "-u"),
            Token::Sum => write!(f, "+"),
            Token::Sub => write!(f, "-"),
            Token::Mult => write!(f, "*"),
            Token::Div => write!(f, "/"),
            Token::Pow => write!(f, "^"),
            Token::Cos => write!(f, "cos"),
            Token::Sin => write!(f, "sin"),
            Token::Tan => write!(f, "tan"),
            Token::Ln => write!(f, "ln"),
            Token::Log => write!(f, "log"),
            Token::ArgumentDelimiter => write!(f, ","),
            Token::LeftBracket => write!(f, "("),
            Token::RightBracket => write!(f, ")"),
        }
    }
}
