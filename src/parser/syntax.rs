//! LL(1) recursive-descent syntax analysis.
//!
//! One method per non-terminal, dispatching on a single token of lookahead:
//!
//! ```text
//! Song        -> Blank title Blank Body          title: one TEXT token
//! Blank       -> eol Blank | ε
//! Body        -> Verse VerseSep Body | ε         stops at eoi
//! VerseSep    -> eol Blank | ε
//! Verse       -> Line LineSep RestOfVerse
//! RestOfVerse -> Line LineSep RestOfVerse | ε    stops at eol/eoi
//! Line        -> '[' Chord ']' RestOfLine | TEXT RestOfLine
//! LineSep     -> eol | ε                         ε before '[', TEXT, eoi
//! RestOfLine  -> '[' Chord ']' RestOfLine | TEXT RestOfLine | eol | ε
//! Chord       -> TEXT ChordTail
//! ChordTail   -> '/' TEXT | ε
//! ```
//!
//! A verse is a maximal run of lines with zero-or-one blank-line separation;
//! two or more blank lines mark a verse boundary. Every FIRST set is
//! disjoint, so no backtracking is needed.

use crate::model::{Chord, Fragment, Line, Song, Title, Verse};

use super::error::ParseError;
use super::lexer::Lexer;
use super::token::{Token, TokenKind};

pub struct Parser {
    lexer: Lexer,
    next: Token,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let next = lexer.next_token();
        Self { lexer, next }
    }

    /// Parse the whole input into a [`Song`].
    pub fn parse(mut self) -> Result<Song, ParseError> {
        self.song()
    }

    fn song(&mut self) -> Result<Song, ParseError> {
        match self.next.kind {
            TokenKind::Eol | TokenKind::Text(_) => {
                self.blank_lines();
                let title_position = self.next.position;
                let raw_title = self.expect_text()?;
                let title = Title::from_raw(&raw_title);
                if title.text().is_empty() {
                    return Err(ParseError::new("title must not be blank", title_position));
                }
                self.blank_lines();
                let verses = self.body()?;
                Ok(Song::new(title, verses))
            }
            _ => Err(self.unexpected("a title line")),
        }
    }

    fn blank_lines(&mut self) {
        while self.next.kind == TokenKind::Eol {
            self.bump();
        }
    }

    fn body(&mut self) -> Result<Vec<Verse>, ParseError> {
        let mut verses = Vec::new();
        loop {
            match self.next.kind {
                TokenKind::LBracket | TokenKind::Text(_) => {
                    verses.push(self.verse()?);
                    self.verse_sep()?;
                }
                TokenKind::Eoi => return Ok(verses),
                _ => return Err(self.unexpected("'[', text or end of input")),
            }
        }
    }

    fn verse_sep(&mut self) -> Result<(), ParseError> {
        match self.next.kind {
            TokenKind::Eol => {
                self.bump();
                self.blank_lines();
                Ok(())
            }
            TokenKind::Eoi => Ok(()),
            _ => Err(self.unexpected("end of line or end of input")),
        }
    }

    fn verse(&mut self) -> Result<Verse, ParseError> {
        let mut lines = vec![self.line()?];
        self.line_sep()?;
        loop {
            match self.next.kind {
                TokenKind::LBracket | TokenKind::Text(_) => {
                    lines.push(self.line()?);
                    self.line_sep()?;
                }
                TokenKind::Eol | TokenKind::Eoi => return Ok(Verse::new(lines)),
                _ => return Err(self.unexpected("'[', text, end of line or end of input")),
            }
        }
    }

    fn line_sep(&mut self) -> Result<(), ParseError> {
        match self.next.kind {
            TokenKind::Eol => {
                self.bump();
                Ok(())
            }
            TokenKind::LBracket | TokenKind::Text(_) | TokenKind::Eoi => Ok(()),
            _ => Err(self.unexpected("'[', text, end of line or end of input")),
        }
    }

    fn line(&mut self) -> Result<Line, ParseError> {
        let mut fragments = Vec::new();
        match self.next.kind {
            TokenKind::LBracket => fragments.push(self.chord_fragment()?),
            TokenKind::Text(_) => fragments.push(Fragment::Text(self.expect_text()?)),
            _ => return Err(self.unexpected("'[' or text")),
        }
        loop {
            match self.next.kind {
                TokenKind::LBracket => fragments.push(self.chord_fragment()?),
                TokenKind::Text(_) => fragments.push(Fragment::Text(self.expect_text()?)),
                TokenKind::Eol => {
                    self.bump();
                    return Ok(Line::new(fragments));
                }
                TokenKind::Eoi => return Ok(Line::new(fragments)),
                _ => return Err(self.unexpected("'[', text, end of line or end of input")),
            }
        }
    }

    fn chord_fragment(&mut self) -> Result<Fragment, ParseError> {
        self.expect(TokenKind::LBracket, "'['")?;
        let root = self.expect_text()?;
        let bass = match self.next.kind {
            TokenKind::Slash => {
                self.bump();
                Some(self.expect_text()?)
            }
            TokenKind::RBracket => None,
            _ => return Err(self.unexpected("'/' or ']'")),
        };
        self.expect(TokenKind::RBracket, "']'")?;
        Ok(Fragment::Chord(Chord::new(root, bass)))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<(), ParseError> {
        if self.next.kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_text(&mut self) -> Result<String, ParseError> {
        if matches!(self.next.kind, TokenKind::Text(_)) {
            match self.bump().kind {
                TokenKind::Text(text) => Ok(text),
                _ => unreachable!("lookahead was text"),
            }
        } else {
            Err(self.unexpected("text"))
        }
    }

    fn bump(&mut self) -> Token {
        std::mem::replace(&mut self.next, self.lexer.next_token())
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::new(
            format!("expected {expected}, found {}", self.next.kind.name()),
            self.next.position,
        )
    }
}
