//! Spoiler-free result text for the clipboard.
use std::fmt::Write as _;

use crate::board::ROWS;
use crate::calendar::Day;
use crate::session::GameSession;
use crate::status::RowStatuses;
use crate::store::GameState;

/// `4/6`, or `X/6` for a loss. `None` while still playing.
#[must_use]
pub fn score_label(state: GameState, rows_used: usize) -> Option<String> {
    match state {
        GameState::Won => Some(format!("{rows_used}/{ROWS}")),
        GameState::Lost => Some(format!("X/{ROWS}")),
        GameState::Playing => None,
    }
}

/// Header line followed by one emoji row per scored guess.
#[must_use]
pub fn share_text<'a, I>(day: Day, rows: I, state: GameState, colorblind: bool) -> String
where
    I: IntoIterator<Item = &'a RowStatuses>,
{
    let rows: Vec<&RowStatuses> = rows.into_iter().collect();
    let mut text = format!("Wordle Archive {day}");
    if let Some(label) = score_label(state, rows.len()) {
        let _ = write!(text, " {label}");
    }
    text.push_str("\n\n");
    let grid = rows
        .iter()
        .map(|row| row.iter().map(|status| status.emoji(colorblind)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    text.push_str(&grid);
    text
}

/// Share text for the session as it stands.
#[must_use]
pub fn session_share_text(session: &GameSession, colorblind: bool) -> String {
    share_text(session.day(), session.scored_rows(), session.state(), colorblind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status::{Gray, Green, Yellow};

    #[test]
    fn won_share_lists_rows() {
        let rows = [[Yellow, Green, Gray, Gray, Gray], [Green; 5]];
        let text = share_text(10, &rows, GameState::Won, false);
        assert_eq!(text, "Wordle Archive 10 2/6\n\n🟨🟩⬛⬛⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colorblind_loss_uses_alternate_squares() {
        let rows = [[Green, Yellow, Gray, Gray, Gray]; 6];
        let text = share_text(3, &rows, GameState::Lost, true);
        assert!(text.starts_with("Wordle Archive 3 X/6\n\n🟧🟦⬛⬛⬛\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn playing_has_no_score() {
        assert_eq!(score_label(GameState::Playing, 2), None);
        assert_eq!(share_text(1, std::iter::empty(), GameState::Playing, false), "Wordle Archive 1\n\n");
    }
}
