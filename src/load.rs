//! Loading songs from disk.
//!
//! One song per UTF-8 `.txt` file. Loading a directory is lenient: files
//! that fail to read or parse are logged and skipped so one bad song never
//! hides the rest of the book.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Song;
use crate::parser::{self, ParseError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
}

/// A song together with the file it came from.
#[derive(Debug, Clone)]
pub struct SongFile {
    pub path: PathBuf,
    pub song: Song,
}

impl SongFile {
    /// The song's stable identifier: its file stem. Used as the key in the
    /// transpose map.
    pub fn identifier(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }
}

/// Load and parse a single song file.
pub fn load_song(path: &Path) -> Result<SongFile, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let song = parser::parse(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SongFile {
        path: path.to_path_buf(),
        song,
    })
}

/// Load every `.txt` song in a directory, skipping files that fail.
pub fn load_dir(dir: &Path) -> Result<Vec<SongFile>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut songs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }
        match load_song(&path) {
            Ok(song_file) => songs.push(song_file),
            Err(err) => log::error!("skipping song: {err}"),
        }
    }
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_song_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "amazing_grace.txt", "Amazing Grace\n\n[G]la\n");

        let song_file = load_song(&path).unwrap();
        assert_eq!(song_file.song.title().text(), "Amazing Grace");
        assert_eq!(song_file.identifier(), "amazing_grace");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_song(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn syntax_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "broken.txt", "Title\n\n[G la\n");
        let err = load_song(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.txt"));
    }

    #[test]
    fn directory_scan_skips_bad_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "one.txt", "One\n\nla\n");
        write_file(dir.path(), "two.txt", "Two\n\n[C]lb\n");
        write_file(dir.path(), "broken.txt", "\n\n\n");
        write_file(dir.path(), "notes.md", "Not a song\n\nla\n");

        let mut titles: Vec<String> = load_dir(dir.path())
            .unwrap()
            .into_iter()
            .map(|sf| sf.song.title().text().to_string())
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dir(&dir.path().join("absent")).is_err());
    }
}
