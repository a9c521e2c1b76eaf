//! Token definitions for Monkey.

use monkey_common::Span;
use serde::Serialize;
use std::fmt;

/// A token with its kind, source text and span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token. Empty for [`TokenKind::Eof`].
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// The end-of-input token for a source of `len` bytes.
    pub fn eof(len: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), Span::point(len))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}

/// The kind of a token.
///
/// The serialized and displayed spelling of each kind is stable; see
/// [`TokenKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Special
    #[serde(rename = "illegal")]
    Illegal,
    #[serde(rename = "end-of-input")]
    Eof,

    // Identifiers and literals
    #[serde(rename = "identifier")]
    Ident, // add, foobar, x, y
    #[serde(rename = "integer")]
    Int, // 1343456

    // Operators
    #[serde(rename = "assign")]
    Assign, // =
    #[serde(rename = "plus")]
    Plus, // +
    #[serde(rename = "minus")]
    Minus, // -
    #[serde(rename = "bang")]
    Bang, // !
    #[serde(rename = "asterisk")]
    Asterisk, // *
    #[serde(rename = "slash")]
    Slash, // /
    #[serde(rename = "less-than")]
    Lt, // <
    #[serde(rename = "greater-than")]
    Gt, // >
    #[serde(rename = "equals")]
    Eq, // ==
    #[serde(rename = "not-equals")]
    NotEq, // !=

    // Delimiters
    #[serde(rename = "comma")]
    Comma, // ,
    #[serde(rename = "semicolon")]
    Semicolon, // ;
    #[serde(rename = "left-paren")]
    LParen, // (
    #[serde(rename = "right-paren")]
    RParen, // )
    #[serde(rename = "left-brace")]
    LBrace, // {
    #[serde(rename = "right-brace")]
    RBrace, // }

    // Keywords
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "let")]
    Let,
    #[serde(rename = "true")]
    True,
    #[serde(rename = "false")]
    False,
    #[serde(rename = "if")]
    If,
    #[serde(rename = "else")]
    Else,
    #[serde(rename = "return")]
    Return,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 27] = [
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ];

    /// Stable spelling of this kind, used for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal",
            TokenKind::Eof => "end-of-input",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Assign => "assign",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Bang => "bang",
            TokenKind::Asterisk => "asterisk",
            TokenKind::Slash => "slash",
            TokenKind::Lt => "less-than",
            TokenKind::Gt => "greater-than",
            TokenKind::Eq => "equals",
            TokenKind::NotEq => "not-equals",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::LParen => "left-paren",
            TokenKind::RParen => "right-paren",
            TokenKind::LBrace => "left-brace",
            TokenKind::RBrace => "right-brace",
            TokenKind::Function => "function",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        }
    }

    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    /// Returns the keyword for an identifier, if any.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|&(_, kind)| kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reserved spellings and the keyword kind each one maps to.
/// Keyword classification everywhere in the lexer reads from this table.
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Classify an identifier-shaped lexeme as a keyword or a plain identifier.
pub fn lookup_ident(ident: &str) -> TokenKind {
    TokenKind::keyword_from_str(ident).unwrap_or(TokenKind::Ident)
}
