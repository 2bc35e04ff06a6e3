//! The 6×5 guess grid and its persisted representation.
use serde::{Deserialize, Serialize};

use crate::word::{WORD_LEN, Word};

/// Guess attempts per day.
pub const ROWS: usize = 6;
/// Letters per guess.
pub const COLS: usize = WORD_LEN;

pub type Row = [Option<char>; COLS];

/// Position of the next letter to be typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// All six rows are used up.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.row >= ROWS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardShapeError {
    #[error("expected {ROWS} rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected {COLS}")]
    RowLength { row: usize, len: usize },
    #[error("cell {row}:{col} holds '{text}', expected one letter or nothing")]
    Cell { row: usize, col: usize, text: String },
}

/// Grid of guessed letters, stored as uppercase `char`s.
///
/// Persisted as a 6×5 array of single-character strings where `""` marks an
/// empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<String>>", try_from = "Vec<Vec<String>>")]
pub struct Board {
    cells: [Row; ROWS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board holding `word` on the first row and nothing else.
    #[must_use]
    pub fn with_first_row(word: &Word) -> Self {
        let mut board = Self::default();
        for (col, letter) in word.letters().enumerate() {
            board.cells[0][col] = Some(letter);
        }
        board
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.cells.get(row)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.cells.iter()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: Option<char>) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = letter.map(|l| l.to_ascii_uppercase());
        }
    }

    /// Letters typed so far on `row`, joined.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .map(|cells| cells.iter().flatten().collect())
            .unwrap_or_default()
    }

    /// The row as a complete word, if all five cells are filled.
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        self.row(row).and_then(Word::from_letters)
    }

    #[must_use]
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row).is_none_or(|cells| cells.iter().all(Option::is_none))
    }

    /// Count of rows holding at least one letter.
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        (0..ROWS).filter(|&row| !self.is_row_empty(row)).count()
    }

    /// First empty cell of the first non-full row, or row 6 / col 0.
    #[must_use]
    pub fn active_cell(&self) -> Cursor {
        for (row, cells) in self.cells.iter().enumerate() {
            if let Some(col) = cells.iter().position(Option::is_none) {
                return Cursor { row, col };
            }
        }
        Cursor { row: ROWS, col: 0 }
    }
}

impl From<Board> for Vec<Vec<String>> {
    fn from(board: Board) -> Self {
        board
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Board {
    type Error = BoardShapeError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        if rows.len() != ROWS {
            return Err(BoardShapeError::RowCount(rows.len()));
        }
        let mut board = Self::default();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != COLS {
                return Err(BoardShapeError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, text) in cells.iter().enumerate() {
                let mut chars = text.chars();
                board.cells[row][col] = match (chars.next(), chars.next()) {
                    (None, _) => None,
                    (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_uppercase()),
                    _ => {
                        return Err(BoardShapeError::Cell {
                            row,
                            col,
                            text: text.clone(),
                        });
                    }
                };
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_cell_tracks_first_gap() {
        let mut board = Board::new();
        assert_eq!(board.active_cell(), Cursor { row: 0, col: 0 });
        for (col, ch) in "CHANT".chars().enumerate() {
            board.set(0, col, Some(ch));
        }
        board.set(1, 0, Some('b'));
        assert_eq!(board.active_cell(), Cursor { row: 1, col: 1 });
        assert_eq!(board.row_text(1), "B");
        assert_eq!(board.filled_rows(), 2);
    }

    #[test]
    fn full_board_parks_cursor_past_last_row() {
        let word = Word::parse("vivid").unwrap();
        let mut board = Board::new();
        for row in 0..ROWS {
            for (col, ch) in word.letters().enumerate() {
                board.set(row, col, Some(ch));
            }
        }
        let cursor = board.active_cell();
        assert_eq!(cursor, Cursor { row: ROWS, col: 0 });
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn serializes_as_string_grid() {
        let board = Board::with_first_row(&Word::parse("bloke").unwrap());
        let json = serde_json::to_value(board).unwrap();
        assert_eq!(json[0][0], "B");
        assert_eq!(json[0][4], "E");
        assert_eq!(json[5][2], "");
        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn rejects_malformed_grids() {
        let short: Result<Board, _> = serde_json::from_str(r#"[["A","","","",""]]"#);
        assert!(short.is_err());

        let mut rows = vec![vec![String::new(); COLS]; ROWS];
        rows[2][3] = "AB".into();
        assert_eq!(
            Board::try_from(rows),
            Err(BoardShapeError::Cell {
                row: 2,
                col: 3,
                text: "AB".into()
            })
        );
    }
}
