//! CLI command implementations.

pub mod lex;
pub mod repl;
