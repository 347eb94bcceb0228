//! Parse error type.

use thiserror::Error;

use super::token::Position;

/// A syntax error with the position of the offending token.
///
/// The parser never recovers: the first token outside the expected FIRST set
/// aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based column of the offending token.
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Absolute character offset of the offending token.
    pub fn offset(&self) -> usize {
        self.position.offset
    }
}
