//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和表达式上下文打印。

use mathlex_api::MathlexError;

/// 打印错误并显示表达式上下文
pub fn print_error_with_source(e: &MathlexError, source: &str) {
    eprintln!("error: {}", e);

    if let (Some(line), Some(column)) = (e.line(), e.column()) {
        print_source_context(source, line, column);
    }
}

/// 打印表达式上下文（标出错误位置）
///
/// 表达式通常是单行，但输入里的换行按空白跳过，错误仍可能
/// 落在后续行上，因此按行定位。
pub fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    let lines: Vec<&str> = source.lines().collect();

    if error_line == 0 || error_line > lines.len() {
        return;
    }

    let line_content = lines[error_line - 1];
    let line_str = error_line.to_string();

    eprintln!("{} | {}", line_str, line_content);

    // 指向错误列的标记
    let marker_offset = error_col.saturating_sub(1);
    let padding: String = std::iter::repeat(' ').take(line_str.len()).collect();
    let marker: String = std::iter::repeat(' ').take(marker_offset).collect();
    eprintln!("{} | {}^", padding, marker);
}
