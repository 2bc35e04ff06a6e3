//! Durable per-day outcomes.
//!
//! All days live in one serialized list under [`DAY_STATE_KEY`], index `day - 1`.
//! Every mutation reads the whole list, edits one record and writes the whole
//! list back. Two on-disk shapes exist:
//!
//! - legacy: `["won", "playing", "lost", ...]`
//! - current: `[{"state": "won", "board": [[...]], "scoreUnknown": false}, ...]`
//!
//! The legacy shape is recognised once at load time and rewritten in the
//! current shape.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::ArchiveStorage;
use crate::board::{Board, ROWS};
use crate::calendar::Day;
use crate::data::AnswerTable;

pub const DAY_STATE_KEY: &str = "gameStateList";

/// Days initialised on first load.
pub const DEFAULT_ARCHIVE_CAPACITY: usize = 2500;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("day {0} has no answer")]
    UnknownDay(Day),
}

impl ArchiveError {
    pub(crate) fn storage<E: std::error::Error>(err: E) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Outcome of one day's game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Persisted result for one day. A board is kept only for wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub state: GameState,
    pub board: Option<Board>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub score_unknown: bool,
}

impl DayRecord {
    #[must_use]
    pub fn won(board: Board) -> Self {
        Self {
            state: GameState::Won,
            board: Some(board),
            score_unknown: false,
        }
    }

    #[must_use]
    pub fn lost() -> Self {
        Self {
            state: GameState::Lost,
            board: None,
            score_unknown: false,
        }
    }

    /// A win carried over from the legacy list, where the guesses are lost.
    #[must_use]
    pub fn migrated_win(board: Option<Board>) -> Self {
        Self {
            state: GameState::Won,
            board,
            score_unknown: true,
        }
    }

    /// Won with its board retained; reopening shows it read-only.
    #[must_use]
    pub const fn has_saved_solution(&self) -> bool {
        matches!(self.state, GameState::Won) && self.board.is_some()
    }

    /// Won, but the board was cleared so the day can be replayed.
    #[must_use]
    pub const fn is_cleared(&self) -> bool {
        matches!(self.state, GameState::Won) && self.board.is_none()
    }

    /// Guesses used for a saved win.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        if self.score_unknown {
            return None;
        }
        self.board
            .as_ref()
            .map(Board::filled_rows)
            .filter(|&rows| rows > 0)
    }

    /// `3/6` style label, empty when unknown.
    #[must_use]
    pub fn score_label(&self) -> String {
        self.score()
            .map(|rows| format!("{rows}/{ROWS}"))
            .unwrap_or_default()
    }

    /// Menu marker for the day.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self.state {
            GameState::Won => "✔",
            GameState::Lost => "✘",
            GameState::Playing => "",
        }
    }
}

/// Records for every day, index `day - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayBook {
    records: Vec<DayRecord>,
}

impl DayBook {
    /// `capacity` days, all playing with no board.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: vec![DayRecord::default(); capacity],
        }
    }

    fn index(day: Day) -> Option<usize> {
        usize::try_from(day).ok()?.checked_sub(1)
    }

    /// The record for `day`, or the default for days never written.
    #[must_use]
    pub fn get(&self, day: Day) -> DayRecord {
        Self::index(day)
            .and_then(|idx| self.records.get(idx))
            .cloned()
            .unwrap_or_default()
    }

    /// Mutable record for `day`, growing the list with defaults if needed.
    pub fn entry(&mut self, day: Day) -> Option<&mut DayRecord> {
        let idx = Self::index(day)?;
        if idx >= self.records.len() {
            self.records.resize(idx + 1, DayRecord::default());
        }
        self.records.get_mut(idx)
    }

    pub fn set(&mut self, day: Day, record: DayRecord) {
        if let Some(slot) = self.entry(day) {
            *slot = record;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &DayRecord)> {
        (1..).zip(self.records.iter())
    }
}

/// Which shape a stored list is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredShape {
    Legacy(Vec<GameState>),
    Current(DayBook),
}

impl StoredShape {
    /// Inspect the first element: a bare string means the legacy list.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or matches neither shape.
    pub fn detect(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        let legacy = value
            .as_array()
            .and_then(|items| items.first())
            .is_some_and(Value::is_string);
        if legacy {
            serde_json::from_value(value).map(Self::Legacy)
        } else {
            serde_json::from_value(value).map(Self::Current)
        }
    }
}

/// Rewrite a legacy state list in the current shape.
///
/// Wins get the day's answer on the first row and `scoreUnknown` set, since
/// the guesses were never recorded.
#[must_use]
pub fn migrate_legacy(states: &[GameState], answers: &AnswerTable) -> DayBook {
    let records = (1..)
        .zip(states)
        .map(|(day, state)| match state {
            GameState::Won => {
                DayRecord::migrated_win(answers.answer_for(day).map(|w| Board::with_first_row(&w)))
            }
            other => DayRecord {
                state: *other,
                board: None,
                score_unknown: false,
            },
        })
        .collect();
    DayBook { records }
}

/// Day records kept in an [`ArchiveStorage`].
#[derive(Debug, Clone)]
pub struct DayStore<S> {
    storage: S,
    capacity: usize,
}

impl<S: ArchiveStorage> DayStore<S> {
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            capacity: DEFAULT_ARCHIVE_CAPACITY,
        }
    }

    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Read every day's record.
    ///
    /// A missing or unreadable value is replaced with fresh defaults; a
    /// legacy list is migrated. Either way the result is written back.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn load(&self, answers: &AnswerTable) -> Result<DayBook, ArchiveError> {
        let Some(raw) = self
            .storage
            .read(DAY_STATE_KEY)
            .map_err(ArchiveError::storage)?
        else {
            let book = DayBook::with_capacity(self.capacity);
            self.save(&book)?;
            return Ok(book);
        };

        match StoredShape::detect(&raw) {
            Ok(StoredShape::Current(book)) => Ok(book),
            Ok(StoredShape::Legacy(states)) => {
                log::info!("migrating {} legacy day states", states.len());
                let book = migrate_legacy(&states, answers);
                self.save(&book)?;
                Ok(book)
            }
            Err(err) => {
                log::warn!("discarding unreadable day records: {err}");
                let book = DayBook::with_capacity(self.capacity);
                self.save(&book)?;
                Ok(book)
            }
        }
    }

    /// Write every day's record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage backend fails.
    pub fn save(&self, book: &DayBook) -> Result<(), ArchiveError> {
        let json = serde_json::to_string(book)?;
        self.storage
            .write(DAY_STATE_KEY, &json)
            .map_err(ArchiveError::storage)
    }

    /// Load, replace `day`'s record, save.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or saving fails.
    pub fn record(
        &self,
        answers: &AnswerTable,
        day: Day,
        record: DayRecord,
    ) -> Result<DayBook, ArchiveError> {
        let mut book = self.load(answers)?;
        book.set(day, record);
        self.save(&book)?;
        Ok(book)
    }

    /// Forget the saved board of a won day, keeping the win.
    ///
    /// Returns `false` without writing when the day has no saved solution.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or saving fails.
    pub fn clear_solution(&self, answers: &AnswerTable, day: Day) -> Result<bool, ArchiveError> {
        let mut book = self.load(answers)?;
        let Some(record) = book.entry(day).filter(|r| r.has_saved_solution()) else {
            return Ok(false);
        };
        record.board = None;
        self.save(&book)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use crate::word::Word;

    fn answers() -> AnswerTable {
        AnswerTable::from_lines("BLOKE\nVIVID\nSPILL\nCHANT\n").unwrap()
    }

    fn store(storage: &MemoryStorage) -> DayStore<MemoryStorage> {
        DayStore::new(storage.clone()).with_capacity(8)
    }

    #[test]
    fn first_load_writes_defaults() {
        let storage = MemoryStorage::default();
        let book = store(&storage).load(&answers()).unwrap();
        assert_eq!(book.len(), 8);
        assert_eq!(book.get(3), DayRecord::default());
        let raw = storage.snapshot(DAY_STATE_KEY).unwrap();
        assert!(raw.starts_with(r#"[{"state":"playing","board":null}"#));
    }

    #[test]
    fn legacy_list_is_migrated_once() {
        let storage = MemoryStorage::default();
        storage.insert(DAY_STATE_KEY, r#"["won","lost","playing"]"#);
        let store = store(&storage);

        let book = store.load(&answers()).unwrap();
        let first = book.get(1);
        assert!(first.score_unknown);
        assert!(first.has_saved_solution());
        let board = first.board.unwrap();
        assert_eq!(board.row_word(0), Word::parse("BLOKE"));
        assert!(board.is_row_empty(1));
        assert_eq!(first.score(), None);
        assert_eq!(book.get(2), DayRecord::lost());
        assert_eq!(book.get(3), DayRecord::default());

        let migrated = storage.snapshot(DAY_STATE_KEY).unwrap();
        assert!(matches!(
            StoredShape::detect(&migrated),
            Ok(StoredShape::Current(_))
        ));
        let again = store.load(&answers()).unwrap();
        assert_eq!(again, book);
        assert_eq!(storage.snapshot(DAY_STATE_KEY).unwrap(), migrated);
    }

    #[test]
    fn corrupt_value_falls_back_to_defaults() {
        let storage = MemoryStorage::default();
        storage.insert(DAY_STATE_KEY, "{not json");
        let book = store(&storage).load(&answers()).unwrap();
        assert_eq!(book, DayBook::with_capacity(8));

        storage.insert(DAY_STATE_KEY, r#"["won", {"state": "won"}]"#);
        let book = store(&storage).load(&answers()).unwrap();
        assert_eq!(book, DayBook::with_capacity(8));
    }

    #[test]
    fn clear_solution_keeps_win_and_drops_board() {
        let storage = MemoryStorage::default();
        let store = store(&storage);
        let board = Board::with_first_row(&Word::parse("CHANT").unwrap());
        store.record(&answers(), 4, DayRecord::won(board)).unwrap();

        assert!(store.clear_solution(&answers(), 4).unwrap());
        let record = store.load(&answers()).unwrap().get(4);
        assert!(record.is_cleared());
        assert_eq!(record.state, GameState::Won);

        assert!(!store.clear_solution(&answers(), 4).unwrap());
        assert!(!store.clear_solution(&answers(), 2).unwrap());
    }

    #[test]
    fn record_grows_past_capacity() {
        let storage = MemoryStorage::default();
        let book = store(&storage)
            .record(&answers(), 12, DayRecord::lost())
            .unwrap();
        assert_eq!(book.len(), 12);
        assert_eq!(book.get(12).marker(), "✘");
        assert_eq!(book.get(0), DayRecord::default());
    }

    #[test]
    fn score_counts_filled_rows() {
        let mut board = Board::with_first_row(&Word::parse("CRANE").unwrap());
        board.set(1, 0, Some('B'));
        let record = DayRecord::won(board);
        assert_eq!(record.score(), Some(2));
        assert_eq!(record.score_label(), "2/6");
        assert_eq!(DayRecord::lost().score_label(), "");
    }
}
