//! The Monkey read-loop.
//! Monkey 读取循环。
//!
//! Reads source one line at a time, runs a fresh lexer over each line and
//! prints every token it produces. Nothing is parsed or evaluated yet.
//! 逐行读取源码，对每一行运行新的词法分析器并打印所有 token。

mod config;

pub use config::{OutputFormat, ReplConfig};

use monkey_lexer::{Lexer, Token};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// The default prompt.
pub const PROMPT: &str = ">> ";

/// Errors raised while driving the read-loop.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot serialize token: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the read-loop until `input` is exhausted.
///
/// Each line gets its own lexer; tokens are written to `output` in the
/// configured format, one per line. Bytes that are not valid UTF-8 do not
/// end the session: they reach the lexer as U+FFFD.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &ReplConfig,
) -> Result<(), ReplError> {
    let mut line = Vec::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            tracing::debug!("input exhausted");
            return Ok(());
        }

        // Invalid UTF-8 becomes U+FFFD, which the lexer reports as illegal
        let text = String::from_utf8_lossy(&line);
        let source = text.trim_end_matches(['\n', '\r']);
        write_tokens(source, output, config.format)?;
    }
}

/// Tokenize `source` and write every token before end-of-input.
/// Returns the number of tokens written.
pub fn write_tokens<W: Write>(
    source: &str,
    output: &mut W,
    format: OutputFormat,
) -> Result<usize, ReplError> {
    let mut count = 0;

    for token in Lexer::new(source) {
        write_token(&token, output, format)?;
        count += 1;
    }

    tracing::debug!(bytes = source.len(), tokens = count, "tokenized line");
    Ok(count)
}

/// Write a single token followed by a newline.
pub fn write_token<W: Write>(
    token: &Token,
    output: &mut W,
    format: OutputFormat,
) -> Result<(), ReplError> {
    match format {
        OutputFormat::Text => writeln!(output, "{token}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, token)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
