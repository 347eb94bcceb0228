//! Chordbook — parse, transpose and render chord-annotated song sheets.
//!
//! Songs are plain text with inline `[G/C]` chord markers. The parser builds
//! an immutable [`model::Song`] tree; renderers traverse it through the
//! visitor in [`render`] to produce text, HTML or LaTeX, optionally
//! transposed a number of semitones.

pub mod chord;
pub mod load;
pub mod model;
pub mod order;
pub mod parser;
pub mod render;
pub mod settings;
pub mod transpose_map;
