//! Answer table and guess dictionary.
use std::collections::HashSet;

use crate::calendar::Day;
use crate::word::Word;

const BUNDLED_ANSWERS: &str = include_str!("../data/answers.txt");
const BUNDLED_WORDS: &str = include_str!("../data/words.txt");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("line {line}: '{text}' is not a five-letter word")]
    InvalidWord { line: usize, text: String },
    #[error("{0} list is empty")]
    Empty(&'static str),
}

fn parse_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Ordered answers; day `n` uses entry `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerTable {
    answers: Vec<Word>,
}

impl AnswerTable {
    /// Parse one answer per line; blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a line is not a five-letter word or the list is empty.
    pub fn from_lines(text: &str) -> Result<Self, DataError> {
        let answers = parse_lines(text)
            .map(|(line, raw)| {
                Word::parse(raw).ok_or_else(|| DataError::InvalidWord {
                    line,
                    text: raw.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if answers.is_empty() {
            return Err(DataError::Empty("answer"));
        }
        Ok(Self { answers })
    }

    #[must_use]
    pub fn from_words(answers: Vec<Word>) -> Self {
        Self { answers }
    }

    #[must_use]
    pub fn answer_for(&self, day: Day) -> Option<Word> {
        let idx = usize::try_from(day).ok()?.checked_sub(1)?;
        self.answers.get(idx).copied()
    }

    /// Highest day with an answer.
    #[must_use]
    pub fn last_day(&self) -> Day {
        Day::try_from(self.answers.len()).unwrap_or(Day::MAX)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.answers.iter()
    }
}

/// Accepted guesses, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    words: HashSet<Word>,
}

impl Dictionary {
    /// Parse one word per line; blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a line is not a five-letter word or the list is empty.
    pub fn from_lines(text: &str) -> Result<Self, DataError> {
        let mut words = HashSet::new();
        for (line, raw) in parse_lines(text) {
            let word = Word::parse(raw).ok_or_else(|| DataError::InvalidWord {
                line,
                text: raw.to_string(),
            })?;
            words.insert(word);
        }
        if words.is_empty() {
            return Err(DataError::Empty("dictionary"));
        }
        Ok(Self { words })
    }

    /// Add every answer so the day's word is always a legal guess.
    #[must_use]
    pub fn with_answers(mut self, answers: &AnswerTable) -> Self {
        self.words.extend(answers.iter().copied());
        self
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::parse(text).is_some_and(|word| self.words.contains(&word))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in a stable order, for seeded sampling.
    #[must_use]
    pub fn sorted_words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.iter().copied().collect();
        words.sort_unstable();
        words
    }
}

/// Static puzzle data shared by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub answers: AnswerTable,
    pub dictionary: Dictionary,
}

impl Archive {
    #[must_use]
    pub fn new(answers: AnswerTable, dictionary: Dictionary) -> Self {
        let dictionary = dictionary.with_answers(&answers);
        Self {
            answers,
            dictionary,
        }
    }

    #[must_use]
    pub fn last_day(&self) -> Day {
        self.answers.last_day()
    }
}

/// Loader for the word lists compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledData;

impl crate::DataLoader for BundledData {
    type Error = DataError;

    fn load_answers(&self) -> Result<AnswerTable, Self::Error> {
        AnswerTable::from_lines(BUNDLED_ANSWERS)
    }

    fn load_dictionary(&self) -> Result<Dictionary, Self::Error> {
        Dictionary::from_lines(BUNDLED_WORDS)
    }
}
