//! LaTeX renderer.
//!
//! Targets a songbook document class providing the `song` and `songverse`
//! environments and a `\chord{...}` macro. `#` is the only character in the
//! notation that collides with LaTeX syntax, so escaping is unconditional
//! and limited to it.

use crate::model::{Chord, Line, Song, Title, Verse};

use super::{walk, RenderOptions, Visitor};

/// Render a song as a LaTeX `song` environment, transposed by `semitones`.
pub fn render(song: &Song, semitones: i32, options: &RenderOptions) -> String {
    let mut renderer = LatexRenderer {
        out: String::new(),
        semitones,
        options: options.clone(),
        first_line_in_verse: true,
    };
    walk(song, &mut renderer);
    renderer.out
}

fn escape(text: &str) -> String {
    text.replace('#', "\\#")
}

struct LatexRenderer {
    out: String,
    semitones: i32,
    options: RenderOptions,
    first_line_in_verse: bool,
}

impl Visitor for LatexRenderer {
    fn visit_title(&mut self, title: &Title) {
        self.out.push_str("\\begin{song}{");
        self.out.push_str(&escape(&title.full()));
        if self.options.show_transposition && self.semitones != 0 {
            self.out.push_str(&format!(" [{:+}]", self.semitones));
        }
        self.out.push_str("}\n");
    }

    fn exit_song(&mut self, _song: &Song) {
        self.out.push_str("\\end{song}\n");
    }

    fn enter_verse(&mut self, _verse: &Verse) {
        self.out.push_str("\t\\begin{songverse}\n");
        self.first_line_in_verse = true;
    }

    fn exit_verse(&mut self, _verse: &Verse) {
        self.out.push_str("\n\t\\end{songverse}\n");
    }

    fn enter_line(&mut self, _line: &Line) {
        if !self.first_line_in_verse {
            self.out.push_str("\\\\ \n");
        }
        self.first_line_in_verse = false;
        self.out.push_str("\t\t");
    }

    fn visit_text(&mut self, text: &str) {
        self.out.push_str(&escape(text));
    }

    fn visit_chord(&mut self, chord: &Chord) {
        if self.options.chords_visible {
            self.out.push_str("\\chord{");
            self.out.push_str(&escape(&chord.formatted(self.semitones)));
            self.out.push('}');
        }
    }
}
