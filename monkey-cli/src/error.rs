//! Errors surfaced by CLI commands.

use monkey_repl::ReplError;
use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine the current user: neither USER nor USERNAME is set")]
    UnknownUser,

    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),

    #[error(transparent)]
    Repl(#[from] ReplError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0} illegal token(s) found")]
    IllegalTokens(usize),
}
