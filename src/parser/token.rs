//! Token types for the song notation lexer.

use std::fmt;

/// A position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Absolute character offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line:{} col:{} (offset={})",
            self.line, self.column, self.offset
        )
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A run of one or more ordinary characters.
    Text(String),
    /// `[` — opens a chord marker.
    LBracket,
    /// `]` — closes a chord marker.
    RBracket,
    /// `/` — separates a chord from its alternate bass.
    Slash,
    /// End of line.
    Eol,
    /// End of input. Repeatable: the lexer keeps yielding it.
    Eoi,
}

impl TokenKind {
    /// Short human-readable name, used in syntax error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Text(_) => "text",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Slash => "'/'",
            TokenKind::Eol => "end of line",
            TokenKind::Eoi => "end of input",
        }
    }
}
