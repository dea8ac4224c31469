//! Mathlex CLI - Command line interface
//!
//! Tokenizes a mathematical expression and dumps the token stream.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing::Level;

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::print_error_with_source;
use mathlex_api::{init_config, tokenize, RunConfig, TokenizeOutput};

/// Token 流输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 每行一个 token，带位置信息
    Pretty,
    /// 词素按空格连接成一行
    Compact,
    /// JSON 数组（工具集成）
    Json,
}

#[derive(Parser)]
#[command(
    name = "mathlex",
    about = "Mathlex - mathematical expression tokenizer",
    version = "0.1.0"
)]
struct Cli {
    /// Expression to tokenize, e.g. "-3.5+cos(x1)*2"
    #[arg(value_name = "EXPR")]
    expression: Option<String>,

    /// Read the expression from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Decimal separator used inside numeric literals
    #[arg(long, value_name = "CHAR", default_value_t = '.')]
    decimal_separator: char,

    /// Argument separator lexed as a delimiter token
    #[arg(long, value_name = "CHAR", default_value_t = ',')]
    argument_separator: char,

    /// Token stream output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Compact)]
    format: OutputFormat,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Append logs to a file in addition to stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_config = LogConfig {
        global: cli
            .log_level
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(Level::WARN),
        ..LogConfig::default()
    };
    logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_ref());

    // Obtain the expression (argument or file)
    let expression = match read_expression(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    // Build run configuration and publish the global singleton
    let run_config = RunConfig::with_separators(cli.decimal_separator, cli.argument_separator);
    init_config(run_config.clone());

    match tokenize(&expression, &run_config) {
        Ok(output) => print_tokens(&output, cli.format),
        Err(e) => {
            print_error_with_source(&e, &expression);
            process::exit(1);
        }
    }
}

/// Read the expression from the positional argument or --file
fn read_expression(cli: &Cli) -> Result<String, String> {
    if let Some(expr) = &cli.expression {
        return Ok(expr.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| format!("Cannot read expression file '{}': {}", path.display(), e));
    }
    Err("missing expression: pass it as an argument or via --file".to_string())
}

/// Parse log level string
fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Dump the token stream in the requested format
fn print_tokens(output: &TokenizeOutput, format: OutputFormat) {
    match format {
        OutputFormat::Compact => {
            let line: Vec<String> = output.tokens.iter().map(|t| t.token.to_string()).collect();
            println!("{}", line.join(" "));
        }
        OutputFormat::Pretty => {
            for spanned in &output.tokens {
                println!(
                    "{:>3}:{:<3} {:?}",
                    spanned.span.start.line, spanned.span.start.column, spanned.token
                );
            }
        }
        OutputFormat::Json => {
            // serde 序列化不会失败：Token 树是纯数据
            println!(
                "{}",
                serde_json::to_string_pretty(&output.tokens).expect("serialize tokens")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), Some(Level::INFO));
        assert_eq!(parse_log_level("TRACE"), Some(Level::TRACE));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn test_cli_parses_separators() {
        let cli = Cli::parse_from([
            "mathlex",
            "log(2;8)",
            "--argument-separator",
            ";",
            "--format",
            "json",
        ]);
        assert_eq!(cli.argument_separator, ';');
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.expression.as_deref(), Some("log(2;8)"));
    }
}
