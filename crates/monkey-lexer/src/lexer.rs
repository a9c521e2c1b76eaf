//! The Monkey lexer.
//! Monkey 词法分析器。

use crate::token::{Token, TokenKind, lookup_ident};
use monkey_common::Span;
use std::iter::FusedIterator;

/// The Monkey lexer.
/// Monkey 词法分析器。
///
/// A cursor over an immutable source buffer that hands out one token per
/// call to [`Lexer::next_token`]. Once the end of input is reached every
/// further call returns another [`TokenKind::Eof`] token.
/// 每次调用 [`Lexer::next_token`] 返回一个 token。
pub struct Lexer<'src> {
    /// Source being scanned
    /// 正在扫描的源码
    input: &'src str,
    /// Index of the byte held in `ch`
    /// `ch` 所对应的字节下标
    position: usize,
    /// Index of the next byte to read
    /// 下一个要读取的字节下标
    read_position: usize,
    /// Byte under examination, `None` past the end of input
    /// 当前检查的字节，超出输入末尾时为 `None`
    ch: Option<u8>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(input: &'src str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenize the entire source, including the trailing end-of-input token.
    /// 对整个源代码进行词法分析，结果包含末尾的 end-of-input token。
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Returns true while a token other than end-of-input remains.
    /// 如果还有非 end-of-input 的 token 则返回 true。
    pub fn has_more(&self) -> bool {
        self.input.as_bytes()[self.position.min(self.input.len())..]
            .iter()
            .any(|&b| !is_whitespace(b))
    }

    /// Scan and return the next token.
    /// 扫描并返回下一个 token。
    pub fn next_token(&mut self) -> Token {
        // Skip whitespace - 跳过空白字符
        self.skip_whitespace();

        let start = self.position;

        let kind = match self.ch {
            // End of input is sticky: no advance
            // 输入结束：不再前进
            None => return Token::eof(self.input.len()),

            // `=` or `==` - 赋值或相等
            Some(b'=') => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }

            // `!` or `!=` - 逻辑非或不等
            Some(b'!') => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }

            // Single character tokens - 单字符 token
            Some(b'+') => TokenKind::Plus,
            Some(b'-') => TokenKind::Minus,
            Some(b'*') => TokenKind::Asterisk,
            Some(b'/') => TokenKind::Slash,
            Some(b'<') => TokenKind::Lt,
            Some(b'>') => TokenKind::Gt,
            Some(b',') => TokenKind::Comma,
            Some(b';') => TokenKind::Semicolon,
            Some(b'(') => TokenKind::LParen,
            Some(b')') => TokenKind::RParen,
            Some(b'{') => TokenKind::LBrace,
            Some(b'}') => TokenKind::RBrace,

            // Identifiers and keywords - 标识符和关键字
            Some(ch) if is_letter(ch) => {
                let literal = self.read_identifier();
                return self.emit(lookup_ident(literal), start);
            }

            // Integers - 整数
            Some(ch) if is_digit(ch) => {
                self.read_number();
                return self.emit(TokenKind::Int, start);
            }

            // A non-ASCII character is reported whole so the literal stays valid UTF-8
            // 非 ASCII 字符整体作为一个非法 token
            Some(ch) if !ch.is_ascii() => {
                let width = self.input[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                for _ in 1..width {
                    self.read_char();
                }
                TokenKind::Illegal
            }

            Some(_) => TokenKind::Illegal,
        };

        // Step past the last byte of the token
        // 越过 token 的最后一个字节
        self.read_char();
        self.emit(kind, start)
    }

    /// Build a token from `start` up to the current position.
    fn emit(&self, kind: TokenKind, start: usize) -> Token {
        let literal = &self.input[start..self.position];
        tracing::trace!(kind = %kind, literal, start, "token");
        Token::new(kind, literal, Span::from_usize(start, self.position))
    }

    /// Advance the cursor by one byte.
    /// 前进一个字节。
    fn read_char(&mut self) {
        self.ch = self.input.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Peek at the next byte without consuming it.
    /// 查看下一个字节但不消耗它。
    fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    /// Skip whitespace characters.
    /// 跳过空白字符。
    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(is_whitespace) {
            self.read_char();
        }
    }

    /// Consume a maximal run of letters and underscores.
    /// 读取由字母和下划线组成的最长序列。
    fn read_identifier(&mut self) -> &'src str {
        let start = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    /// Consume a maximal run of decimal digits.
    /// 读取最长的十进制数字序列。
    fn read_number(&mut self) {
        while self.ch.is_some_and(is_digit) {
            self.read_char();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token before end-of-input, then `None` forever.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// `_` counts as a letter, which allows names like `foo_bar`.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}
