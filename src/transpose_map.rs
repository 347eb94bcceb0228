//! Per-song transposition persistence.
//!
//! A plain line-oriented file, one `name|semitones` entry per line, keyed by
//! the song's file-stem identifier. Malformed lines are logged and skipped
//! on load so one bad entry never takes the whole map down; songs without an
//! entry default to no transposition.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Remembered semitone shifts, keyed by song identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransposeMap {
    entries: BTreeMap<String, i32>,
}

impl TransposeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored shift for a song, zero when absent.
    pub fn get(&self, name: &str) -> i32 {
        self.entries.get(name).copied().unwrap_or(0)
    }

    pub fn set(&mut self, name: impl Into<String>, semitones: i32) {
        self.entries.insert(name.into(), semitones);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the map from its on-disk text form.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();
        for line in text.lines() {
            match parse_entry(line) {
                Some((name, semitones)) => map.set(name, semitones),
                None if line.trim().is_empty() => {}
                None => log::warn!("skipping malformed transpose entry: {line:?}"),
            }
        }
        map
    }

    /// Load the map from `path`. A missing file is an empty map, not an
    /// error; it simply has not been saved yet.
    pub fn load(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(err),
        }
    }

    /// Write the map to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut text = String::new();
        for (name, semitones) in &self.entries {
            text.push_str(name);
            text.push('|');
            text.push_str(&semitones.to_string());
            text.push('\n');
        }
        fs::write(path, text)
    }
}

fn parse_entry(line: &str) -> Option<(&str, i32)> {
    let (name, semitones) = line.split_once('|')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let semitones: i32 = semitones.trim().parse().ok()?;
    Some((name, semitones))
}
