//! Chordbook CLI — check and render chord-annotated song files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use chordbook::load::{self, SongFile};
use chordbook::order::{self, SongOrdering};
use chordbook::render::{render_html, render_latex, render_text, RenderOptions};
use chordbook::settings;
use chordbook::transpose_map::TransposeMap;

#[derive(Parser)]
#[command(name = "chordbook", version, about = "Song sheet parser and renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse song files and report syntax errors.
    Check {
        /// Song files or directories to check.
        paths: Vec<PathBuf>,
    },
    /// Print a sorted song index, grouped by title initial.
    List {
        /// Song files or directories to list.
        paths: Vec<PathBuf>,

        /// Locale tag for sorting, e.g. `en` or `cs-CZ`.
        #[arg(long)]
        locale: Option<String>,
    },
    /// Render song files to a chosen format.
    Render {
        /// Song files or directories to render.
        paths: Vec<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Shift every chord by this many semitones.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        transpose: i32,

        /// Hide chords and render lyrics only.
        #[arg(long)]
        lyrics_only: bool,

        /// Show the active transposition next to the title.
        #[arg(long)]
        indicator: bool,

        /// Put the subtitle on its own line.
        #[arg(long)]
        two_line_title: bool,

        /// Per-song transpose map file (`name|semitones` lines).
        #[arg(long)]
        transpose_map: Option<PathBuf>,

        /// Sort key for multi-song output.
        #[arg(long, value_enum, default_value_t = SortKey::Title)]
        sort: SortKey,

        /// Locale tag for sorting, e.g. `en` or `cs-CZ`.
        #[arg(long)]
        locale: Option<String>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Latex,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SortKey {
    Title,
    Subtitle,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { paths } => check(&paths),
        Command::List { paths, locale } => list(&paths, locale.as_deref()),
        Command::Render {
            paths,
            format,
            transpose,
            lyrics_only,
            indicator,
            two_line_title,
            transpose_map,
            sort,
            locale,
        } => render(
            &paths,
            format,
            transpose,
            lyrics_only,
            indicator,
            two_line_title,
            transpose_map.as_deref(),
            sort,
            locale.as_deref(),
        ),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    }
}

/// Expand files and directories into loaded songs, using the configured
/// songs directory when no path is given.
fn collect_songs(paths: &[PathBuf]) -> Result<Vec<SongFile>, String> {
    let paths: Vec<PathBuf> = if paths.is_empty() {
        let configured = settings::load_settings()
            .songs_dir
            .ok_or("no paths given and no songs_dir configured")?;
        vec![configured]
    } else {
        paths.to_vec()
    };

    let mut songs = Vec::new();
    for path in &paths {
        if path.is_dir() {
            songs.extend(load::load_dir(path).map_err(|e| e.to_string())?);
        } else {
            songs.push(load::load_song(path).map_err(|e| e.to_string())?);
        }
    }
    Ok(songs)
}

fn check(paths: &[PathBuf]) -> Result<(), String> {
    let songs = collect_songs(paths)?;
    for song_file in &songs {
        println!("ok: {} ({})", song_file.path.display(), song_file.song.title().full());
    }
    println!("{} song(s) ok", songs.len());
    Ok(())
}

fn list(paths: &[PathBuf], locale: Option<&str>) -> Result<(), String> {
    let config = settings::load_settings();
    let mut songs = collect_songs(paths)?;

    let locale = locale.unwrap_or(&config.locale);
    let ordering = SongOrdering::for_tag(locale).map_err(|e| e.to_string())?;
    songs.sort_by(|a, b| ordering.by_title(&a.song, &b.song));

    let mut current_group: Option<String> = None;
    for song_file in &songs {
        let group = order::title_group_key(&song_file.song);
        if current_group.as_deref() != Some(group.as_str()) {
            println!("{group}");
            current_group = Some(group);
        }
        println!("  {}", song_file.song.title().full());
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render(
    paths: &[PathBuf],
    format: Format,
    transpose: i32,
    lyrics_only: bool,
    indicator: bool,
    two_line_title: bool,
    transpose_map: Option<&std::path::Path>,
    sort: SortKey,
    locale: Option<&str>,
) -> Result<(), String> {
    let config = settings::load_settings();
    let mut songs = collect_songs(paths)?;

    let locale = locale.unwrap_or(&config.locale);
    let ordering = SongOrdering::for_tag(locale).map_err(|e| e.to_string())?;
    match sort {
        SortKey::Title => songs.sort_by(|a, b| ordering.by_title(&a.song, &b.song)),
        SortKey::Subtitle => songs.sort_by(|a, b| ordering.by_subtitle(&a.song, &b.song)),
    }

    let map = match transpose_map {
        Some(path) => TransposeMap::load(path).map_err(|e| e.to_string())?,
        None => TransposeMap::new(),
    };

    let options = RenderOptions {
        chords_visible: !lyrics_only && config.chords_visible,
        show_transposition: indicator,
        escape_output: format == Format::Html,
        two_line_title: two_line_title || config.two_line_title,
    };

    for song_file in &songs {
        let semitones = transpose + map.get(song_file.identifier());
        let output = match format {
            Format::Text => render_text(&song_file.song, semitones, &options),
            Format::Html => render_html(&song_file.song, semitones, &options),
            Format::Latex => render_latex(&song_file.song, semitones, &options),
        };
        println!("{output}");
    }
    Ok(())
}
