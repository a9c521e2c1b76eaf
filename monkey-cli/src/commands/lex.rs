//! The `monkey lex` command.
//! `monkey lex` 命令。

use crate::error::CliError;
use crate::output;
use monkey_diagnostic::{Diagnostic, emit, illegal_tokens};
use monkey_lexer::Lexer;
use monkey_repl::{OutputFormat, write_token};
use std::fs;
use std::io::{self, Write};

/// Where the source text comes from.
pub enum Input {
    File(String),
    Expr(String),
}

impl Input {
    fn name(&self) -> &str {
        match self {
            Input::File(path) => path,
            Input::Expr(_) => "<expr>",
        }
    }

    fn read(&self) -> Result<String, CliError> {
        match self {
            Input::File(path) => {
                let bytes = fs::read(path).map_err(|source| CliError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Input::Expr(text) => Ok(text.clone()),
        }
    }
}

/// Tokenize the input, print its tokens and report illegal characters.
/// 对输入进行词法分析，打印 token 并报告非法字符。
pub fn run(input: &Input, format: OutputFormat, verbose: bool) -> Result<(), CliError> {
    let source = input.read()?;
    let name = input.name();

    let mut stdout = io::stdout().lock();
    let (count, diagnostics) = lex(&source, &mut stdout, format)?;
    stdout.flush()?;
    drop(stdout);

    if verbose {
        output::info(&format!("{name}: {count} token(s)"));
    }

    for diag in &diagnostics {
        emit(&source, name, diag)?;
    }

    if !diagnostics.is_empty() {
        return Err(CliError::IllegalTokens(diagnostics.len()));
    }

    if verbose {
        output::success("OK - No illegal tokens found");
    }
    Ok(())
}

/// Write every token of `source` to `out`, returning the token count
/// (end-of-input excluded) and a diagnostic per illegal token.
fn lex<W: Write>(
    source: &str,
    out: &mut W,
    format: OutputFormat,
) -> Result<(usize, Vec<Diagnostic>), CliError> {
    let tokens = Lexer::new(source).tokenize();
    let printable = &tokens[..tokens.len().saturating_sub(1)];

    for token in printable {
        write_token(token, out, format)?;
    }

    Ok((printable.len(), illegal_tokens(&tokens)))
}
