//! Consecutive-win bookkeeping.
use serde::{Deserialize, Serialize};

use crate::ArchiveStorage;
use crate::store::{ArchiveError, GameState};

pub const CURRENT_STREAK_KEY: &str = "current-streak";
pub const LONGEST_STREAK_KEY: &str = "longest-streak";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

impl Streaks {
    /// Apply one resolved game. `Playing` leaves the counters untouched.
    ///
    /// Counters saturate at `u32::MAX`, so `longest` never goes backwards.
    pub fn record(&mut self, outcome: GameState) {
        match outcome {
            GameState::Won => {
                if self.current >= self.longest {
                    self.longest = self.longest.saturating_add(1);
                }
                self.current = self.current.saturating_add(1);
            }
            GameState::Lost => self.current = 0,
            GameState::Playing => {}
        }
    }
}

/// Streak counters kept as two independent integers in storage.
#[derive(Debug, Clone)]
pub struct StreakTracker<S> {
    storage: S,
}

impl<S: ArchiveStorage> StreakTracker<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    fn read_counter(&self, key: &str) -> Result<u32, ArchiveError> {
        let raw = self.storage.read(key).map_err(ArchiveError::storage)?;
        Ok(raw.map_or(0, |text| {
            text.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring unreadable {key} value '{text}'");
                0
            })
        }))
    }

    /// Missing or unreadable counters read as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn load(&self) -> Result<Streaks, ArchiveError> {
        Ok(Streaks {
            current: self.read_counter(CURRENT_STREAK_KEY)?,
            longest: self.read_counter(LONGEST_STREAK_KEY)?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn save(&self, streaks: Streaks) -> Result<(), ArchiveError> {
        self.storage
            .write(CURRENT_STREAK_KEY, &streaks.current.to_string())
            .map_err(ArchiveError::storage)?;
        self.storage
            .write(LONGEST_STREAK_KEY, &streaks.longest.to_string())
            .map_err(ArchiveError::storage)
    }

    /// Load, apply `outcome`, save.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn record(&self, outcome: GameState) -> Result<Streaks, ArchiveError> {
        let mut streaks = self.load()?;
        streaks.record(outcome);
        self.save(streaks)?;
        Ok(streaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn wins_extend_both_counters_until_a_loss() {
        let mut streaks = Streaks::default();
        streaks.record(GameState::Won);
        streaks.record(GameState::Won);
        assert_eq!(streaks, Streaks { current: 2, longest: 2 });
        streaks.record(GameState::Lost);
        assert_eq!(streaks, Streaks { current: 0, longest: 2 });
        streaks.record(GameState::Won);
        assert_eq!(streaks, Streaks { current: 1, longest: 2 });
    }

    #[test]
    fn longest_only_moves_once_current_catches_up() {
        let mut streaks = Streaks { current: 2, longest: 3 };
        streaks.record(GameState::Won);
        assert_eq!(streaks, Streaks { current: 3, longest: 3 });
        streaks.record(GameState::Won);
        assert_eq!(streaks, Streaks { current: 4, longest: 4 });
    }

    #[test]
    fn counters_saturate_instead_of_wrapping() {
        let mut streaks = Streaks {
            current: u32::MAX,
            longest: u32::MAX,
        };
        streaks.record(GameState::Won);
        assert_eq!(
            streaks,
            Streaks {
                current: u32::MAX,
                longest: u32::MAX
            }
        );
    }

    #[test]
    fn tracker_survives_maximal_stored_counters() {
        let max = u32::MAX.to_string();
        let storage = MemoryStorage::new()
            .with_entry(CURRENT_STREAK_KEY, &max)
            .with_entry(LONGEST_STREAK_KEY, &max);
        let tracker = StreakTracker::new(storage.clone());

        let streaks = tracker.record(GameState::Won).unwrap();
        assert_eq!(streaks.longest, u32::MAX);
        assert_eq!(storage.snapshot(LONGEST_STREAK_KEY), Some(max.clone()));
        assert_eq!(storage.snapshot(CURRENT_STREAK_KEY), Some(max));
    }

    #[test]
    fn tracker_persists_plain_integers() {
        let storage = MemoryStorage::new().with_entry(CURRENT_STREAK_KEY, "oops");
        let tracker = StreakTracker::new(storage.clone());
        assert_eq!(tracker.load().unwrap(), Streaks::default());

        tracker.record(GameState::Won).unwrap();
        assert_eq!(storage.snapshot(CURRENT_STREAK_KEY).as_deref(), Some("1"));
        assert_eq!(storage.snapshot(LONGEST_STREAK_KEY).as_deref(), Some("1"));
    }
}
