//! Owns the active day and routes input through session, store and streaks.
use rand::Rng;

use crate::ArchiveStorage;
use crate::calendar::{Day, FIRST_DAY, clamp_day};
use crate::data::Archive;
use crate::session::{GameSession, GuessRejected, SubmitOutcome};
use crate::share::session_share_text;
use crate::store::{ArchiveError, DayBook, DayRecord, DayStore, GameState};
use crate::streak::{StreakTracker, Streaks};

/// One row of the archive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub day: Day,
    pub state: GameState,
    /// Won, but the saved board was cleared for replay.
    pub cleared: bool,
    pub score: Option<usize>,
}

impl DaySummary {
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self.state {
            GameState::Won => "✔",
            GameState::Lost => "✘",
            GameState::Playing => "",
        }
    }
}

#[derive(Debug)]
pub struct ArchiveController<S> {
    archive: Archive,
    days: DayStore<S>,
    streaks: StreakTracker<S>,
    today: Day,
    book: DayBook,
    streak_counts: Streaks,
    session: GameSession,
}

impl<S: ArchiveStorage + Clone> ArchiveController<S> {
    /// Load stored progress and open `start_day`, clamped into the archive.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the archive has no answers.
    pub fn new(archive: Archive, storage: S, today: Day, start_day: Day) -> Result<Self, ArchiveError> {
        Self::with_store(archive, DayStore::new(storage.clone()), storage, today, start_day)
    }

    /// As [`Self::new`] with a custom day store, e.g. a smaller capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the archive has no answers.
    pub fn with_store(
        archive: Archive,
        days: DayStore<S>,
        storage: S,
        today: Day,
        start_day: Day,
    ) -> Result<Self, ArchiveError> {
        let last_day = archive.last_day();
        let today = clamp_day(today, last_day);
        let day = clamp_day(start_day, last_day);
        let book = days.load(&archive.answers)?;
        let streaks = StreakTracker::new(storage);
        let streak_counts = streaks.load()?;
        let session = Self::open_session(&archive, &book, day)?;
        Ok(Self {
            archive,
            days,
            streaks,
            today,
            book,
            streak_counts,
            session,
        })
    }

    fn open_session(archive: &Archive, book: &DayBook, day: Day) -> Result<GameSession, ArchiveError> {
        let answer = archive
            .answers
            .answer_for(day)
            .ok_or(ArchiveError::UnknownDay(day))?;
        let record = book.get(day);
        Ok(match record.board {
            Some(board) if record.has_saved_solution() => GameSession::from_saved(day, answer, board),
            _ => GameSession::fresh(day, answer),
        })
    }

    #[must_use]
    pub const fn archive(&self) -> &Archive {
        &self.archive
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn day(&self) -> Day {
        self.session.day()
    }

    /// Latest day offered as "today".
    #[must_use]
    pub const fn today(&self) -> Day {
        self.today
    }

    #[must_use]
    pub const fn streaks(&self) -> Streaks {
        self.streak_counts
    }

    /// Stored record for `day` as of the last load or write.
    #[must_use]
    pub fn record(&self, day: Day) -> DayRecord {
        self.book.get(day)
    }

    pub fn add_letter(&mut self, letter: char) -> bool {
        self.session.add_letter(letter)
    }

    pub fn delete_letter(&mut self) -> bool {
        self.session.delete_letter()
    }

    /// Score the active row, persisting and settling streaks on resolution.
    ///
    /// Persistence is best effort: a storage failure is logged and play goes on.
    ///
    /// # Errors
    ///
    /// Returns [`GuessRejected`] for a short row or unknown word.
    pub fn submit_row(&mut self) -> Result<SubmitOutcome, GuessRejected> {
        let outcome = self.session.submit_row(&self.archive.dictionary)?;
        let record = match outcome {
            SubmitOutcome::Won { .. } => Some(DayRecord::won(*self.session.board())),
            SubmitOutcome::Lost => Some(DayRecord::lost()),
            SubmitOutcome::Ignored | SubmitOutcome::Continue { .. } => None,
        };
        if let Some(record) = record {
            let day = self.day();
            match self.days.record(&self.archive.answers, day, record) {
                Ok(book) => self.book = book,
                Err(err) => log::warn!("could not save day {day}: {err}"),
            }
            self.settle_streak();
        }
        Ok(outcome)
    }

    /// Apply the session's resolution to the streak counters. Repeat calls
    /// for the same resolution do nothing.
    pub fn settle_streak(&mut self) -> Option<Streaks> {
        let outcome = self.session.take_resolution()?;
        match self.streaks.record(outcome) {
            Ok(streaks) => {
                self.streak_counts = streaks;
                Some(streaks)
            }
            Err(err) => {
                log::warn!("could not save streaks: {err}");
                None
            }
        }
    }

    /// Drop the current session and open `day`, clamped into the archive.
    /// Unsubmitted letters are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn switch_day(&mut self, day: Day) -> Result<Day, ArchiveError> {
        let day = clamp_day(day, self.archive.last_day());
        self.book = self.days.load(&self.archive.answers)?;
        self.session = Self::open_session(&self.archive, &self.book, day)?;
        log::debug!("switched to day {day}");
        Ok(day)
    }

    /// Forget the current day's saved board so it can be replayed.
    ///
    /// Returns `false` when the day has no saved solution.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read or written.
    pub fn clear_solution(&mut self) -> Result<bool, ArchiveError> {
        let day = self.day();
        if !self.days.clear_solution(&self.archive.answers, day)? {
            return Ok(false);
        }
        self.switch_day(day)?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn play_first(&mut self) -> Result<Day, ArchiveError> {
        self.switch_day(FIRST_DAY)
    }

    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn play_previous(&mut self) -> Result<Day, ArchiveError> {
        self.switch_day(self.day().saturating_sub(1))
    }

    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn play_next(&mut self) -> Result<Day, ArchiveError> {
        self.switch_day(self.day().saturating_add(1))
    }

    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn play_last(&mut self) -> Result<Day, ArchiveError> {
        self.switch_day(self.today)
    }

    /// A uniformly random day before today, or day 1 when today is day 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn play_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Day, ArchiveError> {
        let day = if self.today > FIRST_DAY {
            rng.gen_range(FIRST_DAY..self.today)
        } else {
            FIRST_DAY
        };
        self.switch_day(day)
    }

    /// Menu rows for days `1..=through`.
    #[must_use]
    pub fn day_summaries(&self, through: Day) -> Vec<DaySummary> {
        (FIRST_DAY..=through)
            .map(|day| {
                let record = self.book.get(day);
                DaySummary {
                    day,
                    state: record.state,
                    cleared: record.is_cleared(),
                    score: record.score(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn share_text(&self, colorblind: bool) -> String {
        session_share_text(&self.session, colorblind)
    }

    /// Close the end-of-game summary for this resolution.
    pub fn acknowledge_summary(&mut self) {
        self.session.acknowledge_summary();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use crate::data::{AnswerTable, Dictionary};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn archive() -> Archive {
        Archive::new(
            AnswerTable::from_lines("BLOKE\nVIVID\nSPILL\nCHANT\nBRINE\nCRANE\n").unwrap(),
            Dictionary::from_lines("slate\nrobin\n").unwrap(),
        )
    }

    fn controller(storage: &MemoryStorage, day: Day) -> ArchiveController<MemoryStorage> {
        ArchiveController::new(archive(), storage.clone(), 5, day).unwrap()
    }

    fn enter(controller: &mut ArchiveController<MemoryStorage>, word: &str) -> SubmitOutcome {
        for ch in word.chars() {
            controller.add_letter(ch);
        }
        controller.submit_row().unwrap()
    }

    #[test]
    fn win_persists_board_and_reopens_read_only() {
        let storage = MemoryStorage::new();
        let mut ctl = controller(&storage, 5);
        enter(&mut ctl, "robin");
        assert_eq!(enter(&mut ctl, "brine"), SubmitOutcome::Won { row: 1 });

        let record = ctl.record(5);
        assert!(record.has_saved_solution());
        assert_eq!(record.score(), Some(2));
        assert_eq!(ctl.streaks(), Streaks { current: 1, longest: 1 });

        ctl.play_previous().unwrap();
        ctl.play_next().unwrap();
        assert!(ctl.session().is_saved_solution());
        assert_eq!(ctl.session().board().row_text(0), "ROBIN");
    }

    #[test]
    fn loss_records_state_without_board() {
        let storage = MemoryStorage::new();
        let mut ctl = controller(&storage, 4);
        for _ in 0..6 {
            enter(&mut ctl, "slate");
        }
        assert_eq!(ctl.session().state(), GameState::Lost);
        assert_eq!(ctl.record(4), DayRecord::lost());
        assert_eq!(ctl.streaks().current, 0);
    }

    #[test]
    fn navigation_is_clamped() {
        let storage = MemoryStorage::new();
        let mut ctl = controller(&storage, 1);
        assert_eq!(ctl.play_previous().unwrap(), 1);
        assert_eq!(ctl.switch_day(99).unwrap(), 6);
        assert_eq!(ctl.play_next().unwrap(), 6);
        assert_eq!(ctl.play_last().unwrap(), 5);
        assert_eq!(ctl.play_first().unwrap(), 1);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let day = ctl.play_random(&mut rng).unwrap();
            assert!((1..5).contains(&day));
        }
    }

    #[test]
    fn summaries_mark_cleared_days() {
        let storage = MemoryStorage::new();
        let mut ctl = controller(&storage, 2);
        enter(&mut ctl, "vivid");
        assert!(ctl.clear_solution().unwrap());
        assert!(!ctl.session().is_saved_solution());
        assert!(!ctl.clear_solution().unwrap());

        let summaries = ctl.day_summaries(3);
        assert_eq!(summaries.len(), 3);
        assert!(summaries[1].cleared);
        assert_eq!(summaries[1].marker(), "✔");
        assert_eq!(summaries[1].score, None);
        assert_eq!(summaries[2].marker(), "");
    }
}
