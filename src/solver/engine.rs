//! Main Hangman solver interface

use super::strategy::Strategy;
use crate::core::{Round, Word};

/// Automatic Hangman player
///
/// Narrows the catalog down to words consistent with a round and asks its
/// strategy for the next letter.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and catalog
    pub const fn new(strategy: S, words: &'a [Word]) -> Self {
        Self { strategy, words }
    }

    /// The strategy driving letter selection
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The catalog the solver draws candidates from
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Get the next letter to guess
    ///
    /// Returns `None` once the round is finished or every letter was tried.
    pub fn next_letter(&self, round: &Round) -> Option<u8> {
        if round.status().is_over() {
            return None;
        }
        let candidates = self.candidates(round);
        self.strategy.select_letter(round, &candidates)
    }

    /// Catalog words consistent with the round so far
    ///
    /// A candidate has the mask's length, matches every revealed slot, holds no
    /// revealed letter in a hidden slot, and contains no wrong letter.
    pub fn candidates(&self, round: &Round) -> Vec<&'a Word> {
        let mask = round.mask();
        let correct = round.correct_letters();
        let wrong = round.wrong_letters();

        self.words
            .iter()
            .filter(|candidate| {
                candidate.len() == mask.len()
                    && !wrong.iter().any(|&letter| candidate.has_letter(letter))
                    && candidate
                        .letters()
                        .iter()
                        .zip(mask.slots())
                        .all(|(letter, slot)| match slot {
                            Some(revealed) => letter == revealed,
                            None => !correct.contains(letter),
                        })
            })
            .collect()
    }

    /// Count how many candidates remain for the round
    pub fn count_candidates(&self, round: &Round) -> usize {
        self.candidates(round).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::FrequencyStrategy;

    fn setup_words() -> Vec<Word> {
        ["kitten", "mitten", "bitten", "ocean", "guitar", "jacket"]
            .iter()
            .map(|t| Word::new(*t, "").unwrap())
            .collect()
    }

    fn round_for(text: &str) -> Round {
        Round::start(Word::new(text, "").unwrap())
    }

    #[test]
    fn candidates_filter_by_length() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        let texts: Vec<&str> = solver
            .candidates(&round_for("kitten"))
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, vec!["kitten", "mitten", "bitten", "guitar", "jacket"]);
    }

    #[test]
    fn candidates_respect_revealed_and_wrong_letters() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        let (round, _) = round_for("kitten").guess('t').unwrap();
        let (round, _) = round.guess('m').unwrap();
        let texts: Vec<&str> = solver.candidates(&round).iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["kitten", "bitten"]);
    }

    #[test]
    fn candidates_exclude_revealed_letter_in_hidden_slot() {
        let words = vec![
            Word::new("abba", "").unwrap(),
            Word::new("abca", "").unwrap(),
        ];
        let solver = Solver::new(FrequencyStrategy, &words);

        // "abca" reveals b at slot 1 only; "abba" would need slot 2 to be b as well
        let (round, _) = round_for("abca").guess('b').unwrap();
        let texts: Vec<&str> = solver.candidates(&round).iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["abca"]);
    }

    #[test]
    fn next_letter_none_when_round_over() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        let round = "ocean"
            .chars()
            .fold(round_for("ocean"), |round, ch| round.guess(ch).unwrap().0);
        assert!(round.status().is_over());
        assert_eq!(solver.next_letter(&round), None);
    }

    #[test]
    fn solver_finishes_catalog_word() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let mut round = round_for("jacket");

        while let Some(letter) = solver.next_letter(&round) {
            round = round.guess(char::from(letter)).unwrap().0;
        }

        assert!(round.status().is_over());
        assert_eq!(solver.count_candidates(&round), 1);
    }
}
