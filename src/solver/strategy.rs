//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::frequency::{english_fallback, most_common_letter};
use crate::core::{Round, Word};

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select the next letter given the round and the words still consistent with it
    ///
    /// Returns `None` once every letter has been guessed.
    fn select_letter(&self, round: &Round, candidates: &[&Word]) -> Option<u8>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most-covering letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, round: &Round, candidates: &[&Word]) -> Option<u8> {
        match self {
            Self::Frequency(s) => s.select_letter(round, candidates),
            Self::Random(s) => s.select_letter(round, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Guess the unguessed letter found in the most candidate words
///
/// Falls back to English letter frequency when the word is not in the catalog.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, round: &Round, candidates: &[&Word]) -> Option<u8> {
        let guessed = round.guessed_letters();
        most_common_letter(candidates, &guessed)
            .map(|(letter, _)| letter)
            .or_else(|| english_fallback(&guessed))
    }
}

/// Random letter selection
///
/// Baseline to compare other strategies against.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, round: &Round, _candidates: &[&Word]) -> Option<u8> {
        use rand::prelude::IndexedRandom;

        let guessed = round.guessed_letters();
        let open: Vec<u8> = (b'a'..=b'z').filter(|l| !guessed.contains(l)).collect();
        open.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_data() -> (Round, Vec<Word>) {
        let round = Round::start(Word::new("kitten", "Young domestic cat").unwrap());
        let candidates = vec![
            Word::new("kitten", "").unwrap(),
            Word::new("mitten", "").unwrap(),
            Word::new("bitten", "").unwrap(),
        ];
        (round, candidates)
    }

    #[test]
    fn from_name_selects_strategy() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("unknown").name(), "frequency");
    }

    #[test]
    fn frequency_picks_most_covering_letter() {
        let (round, candidates) = setup_test_data();
        let refs: Vec<&Word> = candidates.iter().collect();

        let letter = FrequencyStrategy.select_letter(&round, &refs);
        assert_eq!(letter, Some(b'e'));
    }

    #[test]
    fn frequency_never_repeats_a_guess() {
        let (round, candidates) = setup_test_data();
        let refs: Vec<&Word> = candidates.iter().collect();
        let (round, _) = round.guess('e').unwrap();

        let letter = FrequencyStrategy.select_letter(&round, &refs).unwrap();
        assert_ne!(letter, b'e');
        assert!(b"int".contains(&letter));
    }

    #[test]
    fn frequency_falls_back_without_candidates() {
        let (round, _) = setup_test_data();
        assert_eq!(FrequencyStrategy.select_letter(&round, &[]), Some(b'e'));
    }

    #[test]
    fn random_strategy_selects_unguessed_letter() {
        let (round, _) = setup_test_data();
        let round = "kitez"
            .chars()
            .fold(round, |round, ch| round.guess(ch).unwrap().0);

        for _ in 0..50 {
            let letter = RandomStrategy.select_letter(&round, &[]).unwrap();
            assert!(letter.is_ascii_lowercase());
            assert!(!round.has_guessed(letter));
        }
    }
}
