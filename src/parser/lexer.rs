//! Lexer for the song notation.
//!
//! Wraps the [`InputReader`] and coalesces runs of ordinary characters into
//! single [`TokenKind::Text`] tokens. Holds one symbol of lookahead, eagerly
//! fetched on construction.

use super::input::{InputReader, Symbol, SymbolKind};
use super::token::{Token, TokenKind};

pub struct Lexer {
    reader: InputReader,
    next: Symbol,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let mut reader = InputReader::new(source);
        let next = reader.next_symbol();
        Self { reader, next }
    }

    /// Read the next lexical token.
    pub fn next_token(&mut self) -> Token {
        let position = self.next.position;
        let kind = match self.next.kind {
            SymbolKind::LBracket => {
                self.bump();
                TokenKind::LBracket
            }
            SymbolKind::RBracket => {
                self.bump();
                TokenKind::RBracket
            }
            SymbolKind::Slash => {
                self.bump();
                TokenKind::Slash
            }
            SymbolKind::Eol => {
                self.bump();
                TokenKind::Eol
            }
            SymbolKind::Eoi => TokenKind::Eoi,
            SymbolKind::Char(_) => {
                let mut text = String::new();
                while let SymbolKind::Char(c) = self.next.kind {
                    text.push(c);
                    self.bump();
                }
                TokenKind::Text(text)
            }
        };

        Token { kind, position }
    }

    fn bump(&mut self) {
        self.next = self.reader.next_symbol();
    }
}
