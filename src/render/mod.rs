//! Rendering — visitor-driven traversal of the song tree.
//!
//! [`walk`] owns the traversal order; renderers implement [`Visitor`] and
//! only decide what to emit at each node. All output formats share the same
//! pass, so adding a format never touches the tree.

mod html;
mod latex;
mod text;

pub use html::render as render_html;
pub use latex::render as render_latex;
pub use text::render as render_text;

use crate::model::{Chord, Fragment, Line, Song, Title, Verse};

/// Callbacks fired by [`walk`] in document order.
///
/// Every method has a no-op default so renderers implement only the nodes
/// they care about.
#[allow(unused_variables)]
pub trait Visitor {
    fn enter_song(&mut self, song: &Song) {}
    fn visit_title(&mut self, title: &Title) {}
    fn enter_verse(&mut self, verse: &Verse) {}
    fn exit_verse(&mut self, verse: &Verse) {}
    fn enter_line(&mut self, line: &Line) {}
    fn exit_line(&mut self, line: &Line) {}
    fn visit_text(&mut self, text: &str) {}
    fn visit_chord(&mut self, chord: &Chord) {}
    fn exit_song(&mut self, song: &Song) {}
}

/// Drive a visitor over the song in source order.
pub fn walk(song: &Song, visitor: &mut dyn Visitor) {
    visitor.enter_song(song);
    visitor.visit_title(song.title());
    for verse in song.verses() {
        visitor.enter_verse(verse);
        for line in verse.lines() {
            visitor.enter_line(line);
            for fragment in line.fragments() {
                match fragment {
                    Fragment::Text(text) => visitor.visit_text(text),
                    Fragment::Chord(chord) => visitor.visit_chord(chord),
                }
            }
            visitor.exit_line(line);
        }
        visitor.exit_verse(verse);
    }
    visitor.exit_song(song);
}

/// Knobs shared by all renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit chord fragments; off gives a lyrics-only sheet.
    pub chords_visible: bool,
    /// Append the active transposition to the title when it is non-zero.
    pub show_transposition: bool,
    /// Escape text for the target format (HTML only; LaTeX always escapes).
    pub escape_output: bool,
    /// Put the subtitle on its own line instead of after ` - `.
    pub two_line_title: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chords_visible: true,
            show_transposition: false,
            escape_output: false,
            two_line_title: false,
        }
    }
}

/// Escape text for embedding in HTML.
///
/// `%` is rewritten to its URI form so rendered fragments can be dropped
/// into templated links without double-encoding surprises.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '%' => out.push_str("%25"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn escape_covers_the_html_specials() {
        assert_eq!(escape_html(r#"a "b" & <c> 'd' 100%"#), "a &quot;b&quot; &amp; &lt;c&gt; &apos;d&apos; 100%25");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn walk_visits_nodes_in_source_order() {
        struct Trace(Vec<String>);
        impl Visitor for Trace {
            fn visit_title(&mut self, title: &Title) {
                self.0.push(format!("title:{}", title.text()));
            }
            fn enter_verse(&mut self, _: &Verse) {
                self.0.push("verse".to_string());
            }
            fn enter_line(&mut self, _: &Line) {
                self.0.push("line".to_string());
            }
            fn visit_text(&mut self, text: &str) {
                self.0.push(format!("text:{text}"));
            }
            fn visit_chord(&mut self, chord: &Chord) {
                self.0.push(format!("chord:{}", chord.plain()));
            }
        }

        let song = parser::parse("T\n\n[G]la\nlb\n\n\nlc\n").unwrap();
        let mut trace = Trace(Vec::new());
        walk(&song, &mut trace);
        assert_eq!(
            trace.0,
            vec![
                "title:T", "verse", "line", "chord:G", "text:la", "line", "text:lb", "verse",
                "line", "text:lc",
            ]
        );
    }
}
