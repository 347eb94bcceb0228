//! Source reader — turns a character stream into positioned input symbols.
//!
//! Normalizes line endings (`\r` is dropped unconditionally) and silently
//! drops horizontal whitespace that immediately follows a newline, so
//! continuation lines can be re-indented without affecting parsing.

use super::token::Position;

/// A positioned input symbol handed to the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub position: Position,
}

/// The kind of input symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolKind {
    /// An ordinary literal character.
    Char(char),
    LBracket,
    RBracket,
    Slash,
    Eol,
    /// End of input. Reading past it keeps yielding `Eoi`.
    Eoi,
}

pub struct InputReader {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    after_eol: bool,
}

impl InputReader {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            after_eol: false,
        }
    }

    /// Read the next input symbol.
    pub fn next_symbol(&mut self) -> Symbol {
        loop {
            match self.peek() {
                Some('\r') => {
                    self.advance();
                }
                Some(' ' | '\t') if self.after_eol => {
                    self.advance();
                }
                _ => break,
            }
        }
        self.after_eol = false;

        let position = self.position();
        let kind = match self.peek() {
            None => SymbolKind::Eoi,
            Some(ch) => {
                self.advance();
                match ch {
                    '[' => SymbolKind::LBracket,
                    ']' => SymbolKind::RBracket,
                    '/' => SymbolKind::Slash,
                    '\n' => {
                        self.after_eol = true;
                        SymbolKind::Eol
                    }
                    c => SymbolKind::Char(c),
                }
            }
        };

        Symbol { kind, position }
    }

    fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        let ch = self.chars[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<SymbolKind> {
        let mut reader = InputReader::new(source);
        let mut out = Vec::new();
        loop {
            let symbol = reader.next_symbol();
            let done = symbol.kind == SymbolKind::Eoi;
            out.push(symbol.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn classifies_special_characters() {
        assert_eq!(
            kinds("a[/]"),
            vec![
                SymbolKind::Char('a'),
                SymbolKind::LBracket,
                SymbolKind::Slash,
                SymbolKind::RBracket,
                SymbolKind::Eoi,
            ]
        );
    }

    #[test]
    fn drops_carriage_returns() {
        assert_eq!(
            kinds("a\r\nb"),
            vec![
                SymbolKind::Char('a'),
                SymbolKind::Eol,
                SymbolKind::Char('b'),
                SymbolKind::Eoi,
            ]
        );
    }

    #[test]
    fn drops_indentation_after_newline() {
        assert_eq!(
            kinds("a\n\t  b"),
            vec![
                SymbolKind::Char('a'),
                SymbolKind::Eol,
                SymbolKind::Char('b'),
                SymbolKind::Eoi,
            ]
        );
    }

    #[test]
    fn keeps_leading_whitespace_at_start_of_input() {
        assert_eq!(
            kinds(" a"),
            vec![
                SymbolKind::Char(' '),
                SymbolKind::Char('a'),
                SymbolKind::Eoi,
            ]
        );
    }

    #[test]
    fn keeps_interior_whitespace() {
        assert_eq!(
            kinds("a b"),
            vec![
                SymbolKind::Char('a'),
                SymbolKind::Char(' '),
                SymbolKind::Char('b'),
                SymbolKind::Eoi,
            ]
        );
    }

    #[test]
    fn eoi_is_repeatable() {
        let mut reader = InputReader::new("a");
        assert_eq!(reader.next_symbol().kind, SymbolKind::Char('a'));
        assert_eq!(reader.next_symbol().kind, SymbolKind::Eoi);
        assert_eq!(reader.next_symbol().kind, SymbolKind::Eoi);
        assert_eq!(reader.next_symbol().kind, SymbolKind::Eoi);
    }

    #[test]
    fn tracks_line_and_column() {
        let mut reader = InputReader::new("ab\ncd");
        let a = reader.next_symbol();
        assert_eq!((a.position.line, a.position.column), (1, 1));
        let b = reader.next_symbol();
        assert_eq!((b.position.line, b.position.column), (1, 2));
        let eol = reader.next_symbol();
        assert_eq!((eol.position.line, eol.position.column), (1, 3));
        let c = reader.next_symbol();
        assert_eq!((c.position.line, c.position.column), (2, 1));
        assert_eq!(c.position.offset, 3);
    }

    #[test]
    fn crlf_line_numbering_matches_lf() {
        let mut reader = InputReader::new("a\r\nb");
        reader.next_symbol(); // a
        reader.next_symbol(); // eol
        let b = reader.next_symbol();
        assert_eq!((b.position.line, b.position.column), (2, 1));
    }
}
