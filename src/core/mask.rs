//! Masked word display
//!
//! The mask shows revealed letters in place and `_` for every slot still hidden.

use super::Word;
use std::fmt;

/// Placeholder shown for an unguessed letter
pub const PLACEHOLDER: char = '_';

/// The word's display with unguessed letters hidden
///
/// Always holds exactly one slot per letter of the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    slots: Vec<Option<u8>>,
}

impl Mask {
    /// Fully hidden mask for a word
    #[must_use]
    pub fn hidden(word: &Word) -> Self {
        Self {
            slots: vec![None; word.len()],
        }
    }

    /// Mask with every occurrence of the given letters revealed
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Mask, Word};
    ///
    /// let word = Word::new("ocean", "").unwrap();
    /// let mask = Mask::reveal(&word, b"on");
    /// assert_eq!(mask.to_string(), "o _ _ _ n");
    /// assert_eq!(mask.blanks(), 3);
    /// ```
    #[must_use]
    pub fn reveal(word: &Word, letters: &[u8]) -> Self {
        let slots = word
            .letters()
            .iter()
            .map(|ch| letters.contains(ch).then_some(*ch))
            .collect();
        Self { slots }
    }

    /// Slot view: `Some(letter)` when revealed
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Number of letter slots (equals the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots still hidden
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// True when every slot is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.blanks() == 0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(ch) => write!(f, "{}", *ch as char)?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_mask_matches_word_length() {
        let word = Word::new("volcano", "").unwrap();
        let mask = Mask::hidden(&word);
        assert_eq!(mask.len(), 7);
        assert_eq!(mask.blanks(), 7);
        assert_eq!(mask.to_string(), "_ _ _ _ _ _ _");
    }

    #[test]
    fn reveal_fills_every_occurrence() {
        let word = Word::new("kitten", "").unwrap();
        let mask = Mask::reveal(&word, b"t");
        assert_eq!(mask.to_string(), "_ _ t t _ _");
        assert_eq!(mask.slots()[2], Some(b't'));
        assert_eq!(mask.slots()[0], None);
    }

    #[test]
    fn reveal_ignores_absent_letters() {
        let word = Word::new("ocean", "").unwrap();
        let mask = Mask::reveal(&word, b"xyz");
        assert_eq!(mask, Mask::hidden(&word));
    }

    #[test]
    fn complete_when_all_letters_revealed() {
        let word = Word::new("ocean", "").unwrap();
        assert!(!Mask::reveal(&word, b"ocea").is_complete());
        assert!(Mask::reveal(&word, b"naeco").is_complete());
        assert_eq!(Mask::reveal(&word, b"ocean").to_string(), "o c e a n");
    }
}
