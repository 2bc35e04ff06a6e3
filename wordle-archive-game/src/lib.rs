//! Wordle Archive Game Engine
//!
//! Platform-agnostic core for replaying the archive of daily five-letter
//! puzzles: guess scoring, per-day persistence, streaks and navigation.
//! Browser and CLI front ends supply storage through [`ArchiveStorage`].

pub mod board;
pub mod calendar;
pub mod controller;
pub mod data;
pub mod evaluate;
pub mod memory;
pub mod prefs;
pub mod session;
pub mod share;
pub mod status;
pub mod store;
pub mod streak;
pub mod word;

// Re-export commonly used types
pub use board::{Board, COLS, Cursor, ROWS};
pub use calendar::{Day, FIRST_DAY, clamp_day, today, today_at};
pub use controller::{ArchiveController, DaySummary};
pub use data::{AnswerTable, Archive, BundledData, DataError, Dictionary};
pub use evaluate::{evaluate_guess, is_solved, update_letter_statuses};
pub use memory::MemoryStorage;
pub use prefs::Preferences;
pub use session::{GameSession, GuessRejected, SUMMARY_DELAY_MS, SubmitOutcome};
pub use share::{score_label, share_text};
pub use status::{LetterStatuses, RowStatuses, Status};
pub use store::{ArchiveError, DayBook, DayRecord, DayStore, GameState, migrate_legacy};
pub use streak::{StreakTracker, Streaks};
pub use word::Word;

/// Source of the answer table and guess dictionary.
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns an error if the answer list cannot be loaded or parsed.
    fn load_answers(&self) -> Result<AnswerTable, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the dictionary cannot be loaded or parsed.
    fn load_dictionary(&self) -> Result<Dictionary, Self::Error>;

    /// Both lists, with every answer accepted as a guess.
    ///
    /// # Errors
    ///
    /// Returns an error if either list cannot be loaded.
    fn load_archive(&self) -> Result<Archive, Self::Error> {
        Ok(Archive::new(self.load_answers()?, self.load_dictionary()?))
    }
}

/// Synchronous string key/value store, one per browser profile or test.
pub trait ArchiveStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Pairs a data source with storage and opens controllers over them.
pub struct GameEngine<L, S>
where
    L: DataLoader,
    S: ArchiveStorage + Clone,
{
    data_loader: L,
    storage: S,
}

impl<L, S> GameEngine<L, S>
where
    L: DataLoader,
    S: ArchiveStorage + Clone,
{
    pub const fn new(data_loader: L, storage: S) -> Self {
        Self {
            data_loader,
            storage,
        }
    }

    /// Open the archive on `start_day` with `today` as the newest offered day.
    ///
    /// # Errors
    ///
    /// Returns an error if the word lists cannot be loaded or storage fails.
    pub fn open(&self, today: Day, start_day: Day) -> Result<ArchiveController<S>, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let archive = self.data_loader.load_archive().map_err(Into::into)?;
        let controller = ArchiveController::new(archive, self.storage.clone(), today, start_day)?;
        Ok(controller)
    }

    /// Open today's puzzle by the local clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the word lists cannot be loaded or storage fails.
    pub fn open_today(&self) -> Result<ArchiveController<S>, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let archive = self.data_loader.load_archive().map_err(Into::into)?;
        let today = today(archive.last_day());
        let controller = ArchiveController::new(archive, self.storage.clone(), today, today)?;
        Ok(controller)
    }

    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn preferences(&self) -> Result<Preferences, ArchiveError> {
        Preferences::load(&self.storage)
    }

    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn save_preferences(&self, prefs: &Preferences) -> Result<(), ArchiveError> {
        prefs.save(&self.storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl DataLoader for FixtureLoader {
        type Error = Infallible;

        fn load_answers(&self) -> Result<AnswerTable, Self::Error> {
            Ok(AnswerTable::from_words(vec![
                Word::parse("CRANE").unwrap(),
                Word::parse("SLATE").unwrap(),
            ]))
        }

        fn load_dictionary(&self) -> Result<Dictionary, Self::Error> {
            Ok(Dictionary::default())
        }
    }

    #[test]
    fn engine_opens_and_remembers_wins() {
        let storage = MemoryStorage::new();
        let engine = GameEngine::new(FixtureLoader, storage.clone());
        let mut controller = engine.open(2, 2).unwrap();
        for ch in "slate".chars() {
            controller.add_letter(ch);
        }
        assert_eq!(controller.submit_row(), Ok(SubmitOutcome::Won { row: 0 }));

        let reopened = engine.open(2, 2).unwrap();
        assert!(reopened.session().is_saved_solution());
        assert_eq!(reopened.streaks().current, 1);
    }

    #[test]
    fn empty_answer_table_is_an_error() {
        #[derive(Clone, Copy)]
        struct EmptyLoader;
        impl DataLoader for EmptyLoader {
            type Error = Infallible;
            fn load_answers(&self) -> Result<AnswerTable, Self::Error> {
                Ok(AnswerTable::from_words(Vec::new()))
            }
            fn load_dictionary(&self) -> Result<Dictionary, Self::Error> {
                Ok(Dictionary::default())
            }
        }

        let engine = GameEngine::new(EmptyLoader, MemoryStorage::new());
        assert!(engine.open(1, 1).is_err());
    }

    #[test]
    fn preferences_roundtrip_through_engine() {
        let engine = GameEngine::new(BundledData, MemoryStorage::new());
        let mut prefs = engine.preferences().unwrap();
        prefs.toggle_colorblind_mode();
        engine.save_preferences(&prefs).unwrap();
        assert!(engine.preferences().unwrap().colorblind_mode);
    }
}
