//! Plain-text renderer.
//!
//! Emits the song back in its source notation: chords as `[X]` markers
//! inline with the lyrics, verses separated by a blank line pair so the
//! output parses back to the same tree. Verses that carry chords get an
//! extra blank line between their lines for legibility; a single blank line
//! never splits a verse, so the round-trip still holds.

use crate::model::{Chord, Line, Song, Title, Verse};

use super::{walk, RenderOptions, Visitor};

/// Render a song as plain text, transposed by `semitones`.
pub fn render(song: &Song, semitones: i32, options: &RenderOptions) -> String {
    let mut renderer = TextRenderer {
        out: String::new(),
        semitones,
        options: options.clone(),
        verse_has_chords: false,
        first_line_in_verse: true,
    };
    walk(song, &mut renderer);
    renderer.out
}

struct TextRenderer {
    out: String,
    semitones: i32,
    options: RenderOptions,
    verse_has_chords: bool,
    first_line_in_verse: bool,
}

impl Visitor for TextRenderer {
    fn visit_title(&mut self, title: &Title) {
        self.out.push_str(&title.full());
        if self.options.show_transposition && self.semitones != 0 {
            self.out.push_str(&format!(" [{:+}]", self.semitones));
        }
        self.out.push('\n');
    }

    fn enter_verse(&mut self, verse: &Verse) {
        self.out.push_str("\n\n");
        self.verse_has_chords = verse.has_chords();
        self.first_line_in_verse = true;
    }

    fn enter_line(&mut self, _line: &Line) {
        if !self.first_line_in_verse && self.verse_has_chords && self.options.chords_visible {
            self.out.push('\n');
        }
        self.first_line_in_verse = false;
    }

    fn exit_line(&mut self, _line: &Line) {
        self.out.push('\n');
    }

    fn visit_text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn visit_chord(&mut self, chord: &Chord) {
        if self.options.chords_visible {
            self.out.push('[');
            self.out.push_str(&chord.formatted(self.semitones));
            self.out.push(']');
        }
    }
}
