//! HTML renderer.
//!
//! Emits a styling-ready fragment, not a full document: every node gets a
//! classed `div`/`span` (`titleNode`, `verse`, `line`, `text`, `chord`) and
//! the caller supplies the page shell and stylesheet.

use crate::model::{Chord, Line, Song, Title, Verse};

use super::{escape_html, walk, RenderOptions, Visitor};

/// Render a song as an HTML fragment, transposed by `semitones`.
pub fn render(song: &Song, semitones: i32, options: &RenderOptions) -> String {
    let mut renderer = HtmlRenderer {
        out: String::new(),
        semitones,
        options: options.clone(),
    };
    walk(song, &mut renderer);
    renderer.out
}

struct HtmlRenderer {
    out: String,
    semitones: i32,
    options: RenderOptions,
}

impl HtmlRenderer {
    fn escaped(&self, text: &str) -> String {
        if self.options.escape_output {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

impl Visitor for HtmlRenderer {
    fn visit_title(&mut self, title: &Title) {
        self.out.push_str("<div class=\"titleNode\">");
        self.out.push_str("<span class=\"title\">");
        self.out.push_str(&self.escaped(title.text()));
        self.out.push_str("</span>");
        if let Some(subtitle) = title.subtitle() {
            if self.options.two_line_title {
                self.out.push_str("<br/>\n");
            } else {
                self.out.push_str(" - ");
            }
            self.out.push_str("<span class=\"subtitle\">");
            self.out.push_str(&self.escaped(subtitle));
            self.out.push_str("</span>");
        }
        if self.options.show_transposition && self.semitones != 0 {
            self.out
                .push_str(&format!(" <span class=\"transposition\">{:+}</span>", self.semitones));
        }
        self.out.push_str("</div>\n");
    }

    fn enter_verse(&mut self, _verse: &Verse) {
        self.out.push_str("\n\n<div class=\"verse\">\n");
    }

    fn exit_verse(&mut self, _verse: &Verse) {
        self.out.push_str("</div>\n");
    }

    fn enter_line(&mut self, _line: &Line) {
        self.out.push_str("\t<div class=\"line\">\n");
    }

    fn exit_line(&mut self, _line: &Line) {
        self.out.push_str("\n\t</div>\n");
    }

    fn visit_text(&mut self, text: &str) {
        self.out.push_str("<span class=\"text\">");
        self.out.push_str(&self.escaped(text));
        self.out.push_str("</span>");
    }

    fn visit_chord(&mut self, chord: &Chord) {
        if self.options.chords_visible {
            self.out.push_str("<span class=\"chord\">");
            self.out.push_str(&self.escaped(&chord.formatted(self.semitones)));
            self.out.push_str("</span>");
        }
    }
}
