//! 字符游标
//!
//! 在完整输入字符串上提供字符级操作：
//! 预读、消费、前缀匹配、最大匹配扫描
//!
//! 输入在构造时已完整物化，无流式等待状态

use super::position::SourcePosition;

/// 字符游标
///
/// 包装只读字符序列，单向前进，不支持回溯
pub struct Cursor {
    /// 输入的字符序列
    chars: Vec<char>,
    /// 当前字符下标
    index: usize,
    /// 当前位置（行列+字节偏移）
    position: SourcePosition,
}

impl Cursor {
    /// 从完整输入创建游标
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            index: 0,
            position: SourcePosition::start(),
        }
    }

    /// 获取当前位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 是否已到达输入末尾
    pub fn is_eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// 预读第n个字符（不消费）
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    /// 读取并消费一个字符
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.position.advance(c);
        self.index += 1;
        Some(c)
    }

    /// 消费n个字符
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// 检查当前字符是否匹配（不消费）
    pub fn check(&self, expected: char) -> bool {
        self.peek(0) == Some(expected)
    }

    /// 消费当前字符如果匹配
    ///
    /// Returns true if matched and consumed
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.check(expected) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }

    /// 检查剩余输入是否以给定名称开头（不消费）
    pub fn starts_with(&self, name: &str) -> bool {
        name.chars()
            .enumerate()
            .all(|(i, c)| self.peek(i) == Some(c))
    }

    /// 最大匹配扫描：消费满足谓词的最长连续字符串
    pub fn take_while<F>(&mut self, mut predicate: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let mut run = String::new();
        while let Some(c) = self.peek(0) {
            if !predicate(c) {
                break;
            }
            run.push(c);
            let _ = self.advance();
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("abc");

        assert!(cursor.check('a'));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_peek_offset() {
        let cursor = Cursor::new("cos(");
        assert_eq!(cursor.peek(0), Some('c'));
        assert_eq!(cursor.peek(3), Some('('));
        assert_eq!(cursor.peek(4), None);
    }

    #[test]
    fn test_cursor_match_char() {
        let mut cursor = Cursor::new("ab");

        assert!(cursor.match_char('a'));
        assert!(!cursor.match_char('a')); // 已经消费了
        assert!(cursor.match_char('b'));
    }

    #[test]
    fn test_cursor_starts_with() {
        let cursor = Cursor::new("sin(x)");
        assert!(cursor.starts_with("sin"));
        assert!(cursor.starts_with("sin("));
        assert!(!cursor.starts_with("sinh"));
        assert!(!cursor.starts_with("sin(x)y"));
    }

    #[test]
    fn test_cursor_starts_with_after_advance() {
        let mut cursor = Cursor::new("2*tan(");
        cursor.advance_by(2);
        assert!(cursor.starts_with("tan("));
    }

    #[test]
    fn test_cursor_take_while() {
        let mut cursor = Cursor::new("123.45+x");
        let run = cursor.take_while(|c| c.is_ascii_digit() || c == '.');
        assert_eq!(run, "123.45");
        assert!(cursor.check('+'));
    }

    #[test]
    fn test_cursor_take_while_to_eof() {
        let mut cursor = Cursor::new("abc");
        let run = cursor.take_while(|c| c.is_ascii_alphabetic());
        assert_eq!(run, "abc");
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_position_tracking() {
        let mut cursor = Cursor::new("1+\n2");

        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 1);

        cursor.advance(); // '1'
        cursor.advance(); // '+'
        assert_eq!(cursor.position().column, 3);

        cursor.advance(); // '\n'
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 1);
    }

    #[test]
    fn test_cursor_multibyte() {
        let mut cursor = Cursor::new("π+1");
        assert_eq!(cursor.advance(), Some('π'));
        assert_eq!(cursor.position().byte_offset, 2);
        assert_eq!(cursor.advance(), Some('+'));
    }
}
