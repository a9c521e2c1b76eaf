//! Monkey CLI - The Monkey language command line interface.
//! Monkey CLI - Monkey 语言的命令行界面。

mod commands;
mod error;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use monkey_repl::{OutputFormat, ReplConfig};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "monkey")]
#[command(author, version, about = "Monkey - tokenizer front end for the Monkey language", long_about = None)]
struct Cli {
    /// Defaults to `repl` when omitted. / 省略时默认为 `repl`。
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tokenizing REPL. / 启动交互式词法分析 REPL。
    Repl {
        /// Prompt to print before each line (overrides MONKEY_PROMPT).
        /// 每行之前打印的提示符（覆盖 MONKEY_PROMPT）。
        #[arg(long)]
        prompt: Option<String>,

        /// Token output format (text or json). / token 输出格式（text 或 json）。
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Tokenize a file or an inline expression. / 对文件或内联表达式进行词法分析。
    Lex {
        /// The file to tokenize. / 要分析的文件。
        #[arg(required_unless_present = "expr")]
        file: Option<String>,

        /// Tokenize this text instead of a file. / 分析此文本而不是文件。
        #[arg(short, long, conflicts_with = "file")]
        expr: Option<String>,

        /// Token output format (text or json). / token 输出格式（text 或 json）。
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Repl {
        prompt: None,
        format: OutputFormat::Text,
    });

    let result = match command {
        Commands::Repl { prompt, format } => {
            let mut config = ReplConfig::from_env().with_format(format);
            if let Some(prompt) = prompt {
                config.prompt = prompt;
            }
            commands::repl::run(&config)
        }
        Commands::Lex { file, expr, format } => {
            let input = match (file, expr) {
                (Some(path), _) => commands::lex::Input::File(path),
                (None, Some(text)) => commands::lex::Input::Expr(text),
                (None, None) => commands::lex::Input::Expr(String::new()),
            };
            commands::lex::run(&input, format, cli.verbose)
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
