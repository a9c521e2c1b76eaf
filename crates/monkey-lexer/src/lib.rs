//! Lexical analysis for Monkey.
//! Monkey 词法分析模块。
//!
//! This crate provides the lexer that converts source code into tokens.
//! Classification is byte-oriented and ASCII only: letters are `a-z`, `A-Z`
//! and `_`, digits are `0-9`. Anything outside those classes (including every
//! non-ASCII character) becomes an [`TokenKind::Illegal`] token.
//! 本 crate 提供词法分析器，将源代码转换为 token 序列。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{KEYWORDS, Token, TokenKind, lookup_ident};
