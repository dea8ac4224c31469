//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use mathlex_config::TokenizerConfig;
use mathlex_core::FunctionTable;
use once_cell::sync::OnceCell;

/// Tokenization run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Scanner configuration (separators)
    pub tokenizer: TokenizerConfig,
    /// Function table (built-ins by default, open for extension)
    pub functions: FunctionTable,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            functions: FunctionTable::builtin(),
        }
    }
}

impl RunConfig {
    /// Build a configuration from explicit separator characters
    pub fn with_separators(decimal_separator: char, argument_separator: char) -> Self {
        Self {
            tokenizer: TokenizerConfig {
                decimal_separator,
                argument_separator,
            },
            functions: FunctionTable::builtin(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global configuration (falls back to defaults if not initialized)
pub fn config() -> RunConfig {
    GLOBAL_CONFIG.get().cloned().unwrap_or_default()
}

/// Whether the global configuration has been initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.tokenizer.decimal_separator, '.');
        assert_eq!(cfg.tokenizer.argument_separator, ',');
        assert_eq!(cfg.functions.len(), 5);
    }

    #[test]
    fn test_with_separators() {
        let cfg = RunConfig::with_separators(',', ';');
        assert_eq!(cfg.tokenizer.decimal_separator, ',');
        assert_eq!(cfg.tokenizer.argument_separator, ';');
    }
}
