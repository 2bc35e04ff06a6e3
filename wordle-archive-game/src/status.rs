//! Cell and keyboard-letter classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::word::WORD_LEN;

/// Correctness of a guessed letter.
///
/// Variants are ordered by priority so a letter's best status can be compared
/// with `>=`: `Unguessed < Gray < Yellow < Green`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unguessed,
    Gray,
    Yellow,
    Green,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unguessed => "unguessed",
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Emoji square used in share text.
    #[must_use]
    pub const fn emoji(self, colorblind: bool) -> &'static str {
        match (self, colorblind) {
            (Self::Green, false) => "🟩",
            (Self::Green, true) => "🟧",
            (Self::Yellow, false) => "🟨",
            (Self::Yellow, true) => "🟦",
            (Self::Gray | Self::Unguessed, _) => "⬛",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statuses for one submitted row.
pub type RowStatuses = [Status; WORD_LEN];

/// Per-letter keyboard statuses for `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStatuses([Status; 26]);

impl Default for LetterStatuses {
    fn default() -> Self {
        Self([Status::Unguessed; 26])
    }
}

impl LetterStatuses {
    fn slot(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| usize::from(upper as u8 - b'A'))
    }

    /// Status for `letter`; non-alphabetic input reads as unguessed.
    #[must_use]
    pub fn get(&self, letter: char) -> Status {
        Self::slot(letter).map_or(Status::Unguessed, |idx| self.0[idx])
    }

    pub fn set(&mut self, letter: char, status: Status) {
        if let Some(idx) = Self::slot(letter) {
            self.0[idx] = status;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Status)> + '_ {
        (b'A'..=b'Z').map(char::from).zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_matches_upgrade_path() {
        assert!(Status::Green > Status::Yellow);
        assert!(Status::Yellow > Status::Gray);
        assert!(Status::Gray > Status::Unguessed);
    }

    #[test]
    fn letter_statuses_ignore_non_letters() {
        let mut statuses = LetterStatuses::default();
        statuses.set('q', Status::Yellow);
        statuses.set('!', Status::Green);
        assert_eq!(statuses.get('Q'), Status::Yellow);
        assert_eq!(statuses.get('!'), Status::Unguessed);
        assert_eq!(statuses.iter().count(), 26);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Green).unwrap(), "\"green\"");
        assert_eq!(Status::Gray.emoji(true), "⬛");
        assert_eq!(Status::Yellow.emoji(true), "🟦");
    }
}
