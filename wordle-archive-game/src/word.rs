//! Five-letter words as used for answers and guesses.
use std::fmt;
use std::str::FromStr;

/// Number of letters in every answer and guess.
pub const WORD_LEN: usize = 5;

/// An uppercase ASCII five-letter word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a five-letter word")]
pub struct WordParseError(pub String);

impl Word {
    /// Parse a word, accepting either case and surrounding whitespace.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.trim().as_bytes();
        if bytes.len() != WORD_LEN || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        let mut letters = [0_u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Some(Self(letters))
    }

    /// Build a word from five board letters; `None` if any slot is empty.
    #[must_use]
    pub fn from_letters(letters: &[Option<char>; WORD_LEN]) -> Option<Self> {
        let mut bytes = [0_u8; WORD_LEN];
        for (slot, letter) in bytes.iter_mut().zip(letters) {
            let ch = (*letter)?;
            if !ch.is_ascii_alphabetic() {
                return None;
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }
        Some(Self(bytes))
    }

    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Letter at `index` as an uppercase `char`.
    #[must_use]
    pub fn letter(&self, index: usize) -> char {
        char::from(self.0[index])
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied().map(char::from)
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters().any(|l| l == letter.to_ascii_uppercase())
    }

    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.letters().filter(|&l| l == letter).count()
    }

    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.letters().map(|l| l.to_ascii_lowercase()).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| WordParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let word = Word::parse("  brine ").unwrap();
        assert_eq!(word.to_string(), "BRINE");
        assert_eq!(word.to_lowercase(), "brine");
    }

    #[test]
    fn parse_rejects_wrong_length_and_symbols() {
        assert!(Word::parse("four").is_none());
        assert!(Word::parse("sixsix").is_none());
        assert!(Word::parse("ab1de").is_none());
        assert!("".parse::<Word>().is_err());
    }

    #[test]
    fn counts_repeated_letters() {
        let word: Word = "error".parse().unwrap();
        assert_eq!(word.count('r'), 3);
        assert_eq!(word.count('E'), 1);
        assert!(!word.contains('z'));
    }

    #[test]
    fn from_letters_requires_full_row() {
        let full = [Some('c'), Some('h'), Some('a'), Some('n'), Some('t')];
        assert_eq!(Word::from_letters(&full).unwrap().to_string(), "CHANT");
        let partial = [Some('C'), Some('H'), None, None, None];
        assert!(Word::from_letters(&partial).is_none());
    }
}
