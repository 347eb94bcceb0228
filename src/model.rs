//! Immutable song document tree.
//!
//! Built bottom-up by the parser in a single pass and never mutated
//! afterwards; transposition and rendering are read-only traversals. The
//! `has_chords` attributes are folds over child state computed once at
//! construction.

use crate::chord::{self, UnknownChordError};

/// A parsed song: a title and its verses, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    title: Title,
    verses: Vec<Verse>,
}

impl Song {
    pub fn new(title: Title, verses: Vec<Verse>) -> Self {
        Self { title, verses }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    /// True if any verse contains a chord fragment.
    pub fn has_chords(&self) -> bool {
        self.verses.iter().any(Verse::has_chords)
    }
}

/// A song title, split from the raw title line on the first `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    title: String,
    subtitle: Option<String>,
}

impl Title {
    /// Split a raw title line into title and optional subtitle.
    pub fn from_raw(raw: &str) -> Self {
        match raw.split_once('-') {
            Some((title, subtitle)) => Self {
                title: title.trim().to_string(),
                subtitle: Some(subtitle.trim().to_string()),
            },
            None => Self {
                title: raw.trim().to_string(),
                subtitle: None,
            },
        }
    }

    pub fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle,
        }
    }

    pub fn text(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Title and subtitle joined with ` - `.
    pub fn full(&self) -> String {
        match &self.subtitle {
            Some(subtitle) => format!("{} - {}", self.title, subtitle),
            None => self.title.clone(),
        }
    }
}

/// A verse: a run of lines separated by at most one blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    lines: Vec<Line>,
    has_chords: bool,
}

impl Verse {
    pub fn new(lines: Vec<Line>) -> Self {
        let has_chords = lines.iter().any(Line::has_chords);
        Self { lines, has_chords }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn has_chords(&self) -> bool {
        self.has_chords
    }
}

/// One line of a verse: a sequence of text and chord fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    fragments: Vec<Fragment>,
    has_chords: bool,
}

impl Line {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        let has_chords = fragments
            .iter()
            .any(|fragment| matches!(fragment, Fragment::Chord(_)));
        Self {
            fragments,
            has_chords,
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn has_chords(&self) -> bool {
        self.has_chords
    }
}

/// The smallest renderable unit inside a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Literal text, rendered as-is (subject to target-format escaping).
    Text(String),
    /// A chord marker, e.g. `[G]` or `[G/C]`.
    Chord(Chord),
}

/// A chord spelling with an optional alternate bass.
///
/// Spellings are validated only at transposition time; an unrecognized
/// spelling is a rendering-time condition, not a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: String,
    pub bass: Option<String>,
}

impl Chord {
    pub fn new(root: impl Into<String>, bass: Option<String>) -> Self {
        Self {
            root: root.into(),
            bass,
        }
    }

    /// Transpose both spellings by the same delta.
    pub fn transposed(&self, semitones: i32) -> Result<String, UnknownChordError> {
        let root = chord::transpose(&self.root, semitones)?;
        match &self.bass {
            Some(bass) => Ok(format!("{root}/{}", chord::transpose(bass, semitones)?)),
            None => Ok(root),
        }
    }

    /// The untransposed spelling, e.g. `G/C`.
    pub fn plain(&self) -> String {
        match &self.bass {
            Some(bass) => format!("{}/{bass}", self.root),
            None => self.root.clone(),
        }
    }

    /// Transposed spelling for rendering. An unknown root is logged and the
    /// untransposed spelling returned, so one bad chord never hides a song.
    pub fn formatted(&self, semitones: i32) -> String {
        match self.transposed(semitones) {
            Ok(spelling) => spelling,
            Err(err) => {
                log::warn!("{err}: rendering untransposed");
                self.plain()
            }
        }
    }
}
