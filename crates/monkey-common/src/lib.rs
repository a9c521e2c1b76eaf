//! Common utilities and data structures for Monkey.
//!
//! This crate provides foundational types used across the Monkey toolchain:
//! - `Span`: Source code location tracking
//! - `BytePos`: A byte offset into a source buffer

mod span;

pub use span::{BytePos, Span};
