//! Status messages on stderr.
//! 输出到 stderr 的状态消息。
//!
//! Token rows own stdout, so everything here goes to stderr. Colors are
//! dropped when stderr is not a terminal or `NO_COLOR` is set.
//! token 输出占用 stdout，状态消息一律写到 stderr。

use std::io::{self, IsTerminal};

/// Kind of status message, which picks its prefix and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn prefix(self) -> Option<&'static str> {
        match self {
            Level::Success => None,
            Level::Info => Some("info:"),
            Level::Warning => Some("warning:"),
            Level::Error => Some("error:"),
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Level::Success => "32",
            Level::Info => "34",
            Level::Warning => "33",
            Level::Error => "31",
        }
    }
}

/// Format one message line. Only the prefix is colored, except for
/// success lines which have no prefix and are colored whole.
fn paint(level: Level, msg: &str, color: bool) -> String {
    let code = level.ansi();
    match (level.prefix(), color) {
        (Some(prefix), true) => format!("\x1b[{code}m{prefix}\x1b[0m {msg}"),
        (Some(prefix), false) => format!("{prefix} {msg}"),
        (None, true) => format!("\x1b[{code}m{msg}\x1b[0m"),
        (None, false) => msg.to_string(),
    }
}

fn use_color(no_color: Option<std::ffi::OsString>, terminal: bool) -> bool {
    terminal && no_color.is_none_or(|v| v.is_empty())
}

fn print(level: Level, msg: &str) {
    let color = use_color(std::env::var_os("NO_COLOR"), io::stderr().is_terminal());
    eprintln!("{}", paint(level, msg, color));
}

/// Print a success message.
/// 打印成功消息。
pub fn success(msg: &str) {
    print(Level::Success, msg);
}

/// Print a warning, e.g. when the REPL history cannot be saved.
/// 打印警告消息。
pub fn warning(msg: &str) {
    print(Level::Warning, msg);
}

/// Print an error message.
/// 打印错误消息。
pub fn error(msg: &str) {
    print(Level::Error, msg);
}

/// Print an info message.
pub fn info(msg: &str) {
    print(Level::Info, msg);
}
