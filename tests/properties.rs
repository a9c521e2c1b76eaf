//! Property tests for the scanner.

use monkey_lexer::{KEYWORDS, Lexer, Token, TokenKind};
use proptest::prelude::*;

fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

fn kinds_and_literals(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|t| (t.kind, t.literal.clone()))
        .collect()
}

/// Source fragments that always lex to exactly one token on their own.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_]{1,8}",
        "[0-9]{1,8}",
        prop::sample::select(vec![
            "=", "==", "!", "!=", "+", "-", "*", "/", "<", ">", ",", ";", "(", ")", "{", "}",
            "@", "#", "$", "fn", "let", "true", "false", "if", "else", "return",
        ])
        .prop_map(str::to_string),
    ]
}

/// Every ASCII byte the scanner has no class for.
fn unrecognized_ascii() -> Vec<u8> {
    (0u8..128)
        .filter(|b| !b.is_ascii_alphanumeric() && !b"_ \t\r\n=!+-*/<>,;(){}".contains(b))
        .collect()
}

fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n]{1,4}"
}

proptest! {
    #[test]
    fn prop_total_and_idempotent_at_end(source in any::<String>()) {
        let mut lexer = Lexer::new(&source);
        let mut steps = 0;
        while !lexer.next_token().is_eof() {
            steps += 1;
            prop_assert!(steps <= source.len());
        }
        for _ in 0..3 {
            let token = lexer.next_token();
            prop_assert_eq!(token.kind, TokenKind::Eof);
            prop_assert_eq!(token.literal, "");
        }
    }

    #[test]
    fn prop_literals_are_source_slices(source in any::<String>()) {
        let tokens = lex(&source);
        let mut last_end = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.slice(&source), token.literal.as_str());
            prop_assert!(usize::from(token.span.start) >= last_end);
            last_end = usize::from(token.span.end);
        }
        prop_assert_eq!(last_end, source.len());
    }

    #[test]
    fn prop_identifier_munch_is_maximal(word in "[a-zA-Z_]{1,24}") {
        let tokens = lex(&word);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].literal, &word);
        let expected = KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == word)
            .map_or(TokenKind::Ident, |(_, kind)| *kind);
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn prop_integer_munch_is_maximal(digits in "[0-9]{1,40}") {
        let tokens = lex(&digits);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(&tokens[0].literal, &digits);
    }

    #[test]
    fn prop_whitespace_is_transparent(
        parts in prop::collection::vec((fragment(), whitespace(), whitespace()), 0..12)
    ) {
        let tight: Vec<String> = parts.iter().map(|(f, _, _)| f.clone()).collect();
        let spaced: String = parts
            .iter()
            .map(|(f, before, after)| format!("{before}{f}{after}"))
            .collect();
        let single: String = tight.join(" ");

        prop_assert_eq!(
            kinds_and_literals(&lex(&spaced)),
            kinds_and_literals(&lex(&single))
        );
    }

    #[test]
    fn prop_unrecognized_byte_is_one_illegal_token(
        byte in prop::sample::select(unrecognized_ascii()),
        word in "[a-z]{1,5}",
    ) {
        let ch = char::from(byte);
        let source = format!("{word}{ch}{word}");
        let tokens = lex(&source);

        prop_assert_eq!(
            kinds_and_literals(&tokens),
            vec![
                (monkey_lexer::lookup_ident(&word), word.clone()),
                (TokenKind::Illegal, ch.to_string()),
                (monkey_lexer::lookup_ident(&word), word.clone()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }
}
