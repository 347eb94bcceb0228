//! User settings — loads optional ~/.chordbook/config.yaml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings loaded from ~/.chordbook/config.yaml. Every field has a default
/// so a partial (or absent) file is fine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Directory scanned for `.txt` song files.
    #[serde(default)]
    pub songs_dir: Option<PathBuf>,
    /// BCP-47 locale tag driving sort order, e.g. "en" or "cs-CZ".
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Render the subtitle on its own line.
    #[serde(default)]
    pub two_line_title: bool,
    /// Render chord fragments.
    #[serde(default = "default_chords_visible")]
    pub chords_visible: bool,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_chords_visible() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            songs_dir: None,
            locale: default_locale(),
            two_line_title: false,
            chords_visible: default_chords_visible(),
        }
    }
}

/// Get the settings file path.
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chordbook").join("config.yaml"))
}

/// Load settings from ~/.chordbook/config.yaml, falling back to defaults
/// when the file is missing or unreadable.
pub fn load_settings() -> Settings {
    config_path()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|content| serde_yaml::from_str(&content).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.locale, "en");
        assert!(settings.chords_visible);
        assert!(!settings.two_line_title);
        assert!(settings.songs_dir.is_none());
    }

    #[test]
    fn parse_yaml_settings() {
        let yaml = r#"
songs_dir: /home/me/songs
locale: cs-CZ
two_line_title: true
chords_visible: false
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.songs_dir, Some(PathBuf::from("/home/me/songs")));
        assert_eq!(settings.locale, "cs-CZ");
        assert!(settings.two_line_title);
        assert!(!settings.chords_visible);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings: Settings = serde_yaml::from_str("locale: de\n").unwrap();
        assert_eq!(settings.locale, "de");
        assert!(settings.chords_visible);
    }

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        // We only verify this never panics regardless of the host home dir.
        let _ = load_settings();
    }
}
