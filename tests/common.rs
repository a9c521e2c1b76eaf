//! Integration tests for monkey-common crate.

use monkey_common::{BytePos, Span};

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::point(5);
    let non_empty = Span::from_usize(5, 10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_span_slice() {
    let source = "let five = 5;";
    assert_eq!(Span::from_usize(4, 8).slice(source), "five");
    assert_eq!(Span::point(source.len()).slice(source), "");
}

#[test]
fn test_byte_pos_conversions() {
    let pos = BytePos::from(42usize);
    assert_eq!(pos, BytePos(42));
    assert_eq!(usize::from(pos), 42);
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::from_usize(3, 7)), "3..7");
}
