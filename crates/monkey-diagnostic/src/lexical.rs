//! Diagnostics for token streams.
//!
//! The lexer never fails: characters it does not recognize come back as
//! `Illegal` tokens. Rejecting them is up to the consumer, and this module
//! turns them into reportable diagnostics.

use crate::{Diagnostic, ErrorCode, Label};
use monkey_lexer::{Token, TokenKind};

/// Build one diagnostic per illegal token, in source order.
pub fn illegal_tokens(tokens: &[Token]) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Illegal)
        .map(illegal_token)
        .collect()
}

/// The diagnostic for a single illegal token.
pub fn illegal_token(token: &Token) -> Diagnostic {
    let code = ErrorCode::IllegalCharacter;
    let mut diagnostic = Diagnostic::error(
        token.span,
        format!("illegal character {:?}", token.literal),
    )
    .with_code(code)
    .with_label(Label::new(token.span, code.description()));

    if token.literal.chars().any(|c| !c.is_ascii()) {
        diagnostic = diagnostic.with_note("only ASCII characters are recognized");
    }
    if token.literal == "\0" {
        diagnostic = diagnostic.with_help("remove the NUL byte from the source");
    }

    diagnostic
}
