//! Locale-aware song ordering and index grouping.
//!
//! Wraps an ICU collator so titles sort the way the configured language
//! expects rather than by code point (`á` after `a`, Czech `ch` after `h`,
//! and so on).

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use thiserror::Error;

use crate::model::Song;

/// The locale tag could not be resolved to collation rules.
#[derive(Debug, Error)]
#[error("no collation rules for locale '{0}'")]
pub struct CollationError(String);

/// Comparators for sorting song lists under one locale.
pub struct SongOrdering {
    collator: Collator,
}

impl SongOrdering {
    pub fn new(locale: &Locale) -> Result<Self, CollationError> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&locale.clone().into(), options)
            .map_err(|_| CollationError(locale.to_string()))?;
        Ok(Self { collator })
    }

    /// Build an ordering from a BCP-47 tag such as `en` or `cs-CZ`.
    pub fn for_tag(tag: &str) -> Result<Self, CollationError> {
        let locale: Locale = tag
            .parse()
            .map_err(|_| CollationError(tag.to_string()))?;
        Self::new(&locale)
    }

    /// Order songs by title.
    pub fn by_title(&self, a: &Song, b: &Song) -> Ordering {
        self.collator.compare(a.title().text(), b.title().text())
    }

    /// Order songs by subtitle, then title. Songs without a subtitle sort
    /// before songs that have one.
    pub fn by_subtitle(&self, a: &Song, b: &Song) -> Ordering {
        match (a.title().subtitle(), b.title().subtitle()) {
            (None, None) => self.by_title(a, b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(sub_a), Some(sub_b)) => self
                .collator
                .compare(sub_a, sub_b)
                .then_with(|| self.by_title(a, b)),
        }
    }
}

/// Index-group key for a song: its title's first letter, uppercased, in the
/// form `- A -`.
pub fn title_group_key(song: &Song) -> String {
    let initial: String = song
        .title()
        .text()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    format!("- {initial} -")
}
