//! One day's play: the board being filled, its statuses and resolution.
use crate::board::{Board, COLS, Cursor, ROWS};
use crate::calendar::Day;
use crate::data::Dictionary;
use crate::evaluate::{evaluate_guess, is_solved, update_letter_statuses};
use crate::status::{LetterStatuses, RowStatuses, Status};
use crate::store::GameState;
use crate::word::Word;

/// Pause between a game resolving and its summary opening.
pub const SUMMARY_DELAY_MS: u32 = 500;

/// Why a submitted row was refused. The row stays editable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessRejected {
    #[error("not enough letters ({letters} of {COLS})")]
    Incomplete { letters: usize },
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
}

/// Result of an accepted (or ignored) submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit: the session is resolved or read-only.
    Ignored,
    /// Scored; play continues on `row`.
    Continue { row: usize },
    /// Row `row` matched the answer.
    Won { row: usize },
    /// Sixth row missed.
    Lost,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn resolution(self) -> Option<GameState> {
        match self {
            Self::Won { .. } => Some(GameState::Won),
            Self::Lost => Some(GameState::Lost),
            Self::Ignored | Self::Continue { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    day: Day,
    answer: Word,
    board: Board,
    cell_statuses: [RowStatuses; ROWS],
    letter_statuses: LetterStatuses,
    cursor: Cursor,
    state: GameState,
    saved_solution: bool,
    submitted_invalid: bool,
    resolution_settled: bool,
    summary_acknowledged: bool,
}

impl GameSession {
    /// Blank board, playing.
    #[must_use]
    pub fn fresh(day: Day, answer: Word) -> Self {
        Self {
            day,
            answer,
            board: Board::new(),
            cell_statuses: [[Status::Unguessed; COLS]; ROWS],
            letter_statuses: LetterStatuses::default(),
            cursor: Cursor::default(),
            state: GameState::Playing,
            saved_solution: false,
            submitted_invalid: false,
            resolution_settled: false,
            summary_acknowledged: false,
        }
    }

    /// Read-only view of a saved win. Statuses are rebuilt from every filled
    /// row so the board and keyboard keep their colours.
    #[must_use]
    pub fn from_saved(day: Day, answer: Word, board: Board) -> Self {
        let mut session = Self::fresh(day, answer);
        for row in 0..ROWS {
            let Some(word) = board.row_word(row) else {
                continue;
            };
            session.cell_statuses[row] = evaluate_guess(&word, &answer);
            session.letter_statuses = update_letter_statuses(&word, &answer, &session.letter_statuses);
        }
        session.board = board;
        session.cursor = board.active_cell();
        session.state = GameState::Won;
        session.saved_solution = true;
        session
    }

    #[must_use]
    pub const fn day(&self) -> Day {
        self.day
    }

    #[must_use]
    pub const fn answer(&self) -> Word {
        self.answer
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cell_statuses(&self) -> &[RowStatuses; ROWS] {
        &self.cell_statuses
    }

    #[must_use]
    pub fn cell_status(&self, row: usize, col: usize) -> Status {
        self.cell_statuses
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// Statuses of rows that have been scored, top to bottom.
    pub fn scored_rows(&self) -> impl Iterator<Item = &RowStatuses> {
        self.cell_statuses
            .iter()
            .take_while(|row| row.iter().all(|&status| status != Status::Unguessed))
    }

    #[must_use]
    pub const fn letter_statuses(&self) -> &LetterStatuses {
        &self.letter_statuses
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_saved_solution(&self) -> bool {
        self.saved_solution
    }

    /// The last submit was rejected and nothing has been typed since.
    #[must_use]
    pub const fn submitted_invalid(&self) -> bool {
        self.submitted_invalid
    }

    const fn accepts_input(&self) -> bool {
        matches!(self.state, GameState::Playing) && !self.saved_solution
    }

    /// Type `letter` into the active cell. Returns whether the board changed.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if !self.accepts_input()
            || self.cursor.is_exhausted()
            || self.cursor.col >= COLS
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.board.set(self.cursor.row, self.cursor.col, Some(letter));
        self.cursor.col += 1;
        self.submitted_invalid = false;
        true
    }

    /// Clear the cell before the cursor. Returns whether the board changed.
    pub fn delete_letter(&mut self) -> bool {
        if !self.accepts_input() || self.cursor.is_exhausted() || self.cursor.col == 0 {
            return false;
        }
        self.cursor.col -= 1;
        self.board.set(self.cursor.row, self.cursor.col, None);
        self.submitted_invalid = false;
        true
    }

    /// Score the active row.
    ///
    /// # Errors
    ///
    /// Returns [`GuessRejected`] when the row is short or not a dictionary
    /// word; the session is otherwise unchanged.
    pub fn submit_row(&mut self, dictionary: &Dictionary) -> Result<SubmitOutcome, GuessRejected> {
        if !self.accepts_input() || self.cursor.is_exhausted() {
            return Ok(SubmitOutcome::Ignored);
        }
        let row = self.cursor.row;
        let Some(word) = self.board.row_word(row) else {
            self.submitted_invalid = true;
            return Err(GuessRejected::Incomplete {
                letters: self.board.row_text(row).len(),
            });
        };
        if !dictionary.contains_word(&word) {
            self.submitted_invalid = true;
            return Err(GuessRejected::UnknownWord(word.to_string()));
        }

        let statuses = evaluate_guess(&word, &self.answer);
        self.cell_statuses[row] = statuses;
        self.letter_statuses = update_letter_statuses(&word, &self.answer, &self.letter_statuses);
        self.cursor = Cursor { row: row + 1, col: 0 };

        let outcome = if is_solved(&statuses) {
            self.state = GameState::Won;
            SubmitOutcome::Won { row }
        } else if row + 1 == ROWS {
            self.state = GameState::Lost;
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Continue { row: row + 1 }
        };
        log::debug!("day {} row {row}: {word} -> {:?}", self.day, outcome);
        Ok(outcome)
    }

    /// Hand out this session's resolution exactly once. Saved solutions were
    /// settled when first won and never resolve again.
    pub(crate) fn take_resolution(&mut self) -> Option<GameState> {
        if self.saved_solution || self.resolution_settled || !self.state.is_terminal() {
            return None;
        }
        self.resolution_settled = true;
        Some(self.state)
    }

    /// The end-of-game summary should open.
    #[must_use]
    pub const fn should_show_summary(&self) -> bool {
        self.state.is_terminal() && !self.saved_solution && !self.summary_acknowledged
    }

    pub fn acknowledge_summary(&mut self) {
        self.summary_acknowledged = true;
    }
}
