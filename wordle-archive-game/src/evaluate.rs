//! Guess scoring against a day's answer.
use smallvec::SmallVec;

use crate::status::{LetterStatuses, RowStatuses, Status};
use crate::word::{WORD_LEN, Word};

/// Classify each letter of `word` against `answer`.
///
/// Greens are claimed first and remove their letter from the pool of
/// unmatched answer letters; yellows then consume from that pool left to
/// right, so a repeated guess letter is highlighted at most as many times as
/// it occurs in the answer.
#[must_use]
pub fn evaluate_guess(word: &Word, answer: &Word) -> RowStatuses {
    let mut statuses = [Status::Gray; WORD_LEN];
    let mut remaining: SmallVec<[u8; WORD_LEN]> = SmallVec::new();

    for (idx, (&guess, &target)) in word.bytes().iter().zip(answer.bytes()).enumerate() {
        if guess == target {
            statuses[idx] = Status::Green;
        } else {
            remaining.push(target);
        }
    }

    for (idx, &guess) in word.bytes().iter().enumerate() {
        if statuses[idx] == Status::Green {
            continue;
        }
        if let Some(pos) = remaining.iter().position(|&letter| letter == guess) {
            statuses[idx] = Status::Yellow;
            remaining.swap_remove(pos);
        }
    }

    statuses
}

/// Fold one submitted word into the keyboard statuses.
///
/// Positional only: a letter is green where it sits in the right slot, yellow
/// when the answer contains it anywhere, otherwise gray. Letters already green
/// are left alone.
#[must_use]
pub fn update_letter_statuses(word: &Word, answer: &Word, prior: &LetterStatuses) -> LetterStatuses {
    let mut next = *prior;
    for (idx, letter) in word.letters().enumerate() {
        if next.get(letter) == Status::Green {
            continue;
        }
        let status = if answer.letter(idx) == letter {
            Status::Green
        } else if answer.contains(letter) {
            Status::Yellow
        } else {
            Status::Gray
        };
        next.set(letter, status);
    }
    next
}

/// Every cell of the row is green.
#[must_use]
pub fn is_solved(statuses: &RowStatuses) -> bool {
    statuses.iter().all(|&status| status == Status::Green)
}
