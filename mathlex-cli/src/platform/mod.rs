//! 平台适配层（CLI 输出格式化）

pub mod cli;

pub use cli::{print_error_with_source, print_source_context};
