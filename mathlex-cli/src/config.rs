//! CLI 配置
//!
//! 包含 CLI 特有的日志级别配置

use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub api: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            lexer: None,
            api: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "mathlex::lexer" => self.lexer.unwrap_or(self.global),
            "mathlex::api" => self.api.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_falls_back_to_global() {
        let cfg = LogConfig {
            global: Level::INFO,
            lexer: Some(Level::TRACE),
            api: None,
        };

        assert_eq!(cfg.level_for("mathlex::lexer"), Level::TRACE);
        assert_eq!(cfg.level_for("mathlex::api"), Level::INFO);
        assert_eq!(cfg.level_for("mathlex::cli"), Level::INFO);
    }
}
