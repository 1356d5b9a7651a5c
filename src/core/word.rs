//! Secret word representation
//!
//! A Word stores a lowercase ASCII word, its hint, and letter position indices
//! used to reveal every occurrence of a guessed letter at once.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A secret word with its hint and letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    hint: String,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from its text and hint
    ///
    /// The text is trimmed and lowercased; the hint is trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Ocean", "Vast blue expanse").unwrap();
    /// assert_eq!(word.text(), "ocean");
    /// assert_eq!(word.hint(), "Vast blue expanse");
    ///
    /// assert!(Word::new("", "nothing").is_err());
    /// assert!(Word::new("r2d2", "droid").is_err());
    /// ```
    pub fn new(text: impl Into<String>, hint: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            hint: hint.into().trim().to_string(),
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the hint attached to this word
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letter slots in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct letters, i.e. the fewest correct guesses that win
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_positions.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
