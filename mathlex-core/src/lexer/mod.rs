//! Mathlex 表达式词法分析器
//!
//! 设计目标：
//! - 单趟扫描：O(n)复杂度，无回溯
//! - 可配置：小数分隔符、参数分隔符、开放函数表
//! - 精准定位：行列追踪，错误显示友好

pub mod core;
pub mod error;
pub mod functions;
pub mod scanner;
pub mod token;

pub use core::{Cursor, SourcePosition, SourceSpan};
pub use error::{ErrorKind, LexError};
pub use functions::FunctionTable;
pub use scanner::{ExprScanner, SpannedToken};
pub use token::{Token, TokenCategory};
