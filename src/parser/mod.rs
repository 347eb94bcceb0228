//! Song notation parser.
//!
//! Pipeline: [`input::InputReader`] normalizes the raw character stream,
//! [`lexer::Lexer`] groups symbols into tokens, and [`syntax::Parser`] builds
//! the [`crate::model::Song`] tree with one token of lookahead.

mod error;
mod input;
mod lexer;
mod syntax;
mod token;

pub use error::ParseError;
pub use token::Position;

use crate::model::Song;

/// Parse a complete song document.
pub fn parse(source: &str) -> Result<Song, ParseError> {
    syntax::Parser::new(source).parse()
}
