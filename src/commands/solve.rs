//! Word solving command
//!
//! Plays a round for a specific target word and returns the guess path.

use crate::core::{GuessOutcome, Round, RoundError, Status, Word, WordError};
use crate::solver::{Solver, Strategy};
use thiserror::Error;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Spend a life on the hint before the first guess
    pub use_hint: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            use_hint: false,
        }
    }
}

/// Errors raised while solving a word
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Invalid target word: {0}")]
    InvalidTarget(#[from] WordError),

    #[error("Solver rejected a letter: {0}")]
    Round(#[from] RoundError),

    #[error("Solver ran out of letters with the round still in progress")]
    OutOfLetters,
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub target: String,
    pub hint: Option<String>,
    pub lives_left: u8,
    pub final_mask: String,
}

/// A single guess in the solution
pub struct SolveStep {
    pub letter: char,
    pub outcome: GuessOutcome,
    pub mask: String,
    pub lives_after: u8,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver
///
/// The target need not be in the solver's catalog; its hint is taken from the
/// catalog when it is.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or not ASCII letters)
/// - The solver runs out of letters before the round ends
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, SolveError> {
    let probe = Word::new(&config.target, "")?;
    let target_word = solver
        .words()
        .iter()
        .find(|w| w.text() == probe.text())
        .cloned()
        .unwrap_or(probe);

    tracing::debug!(target = %target_word, "solving");
    let mut round = Round::start(target_word);

    if config.use_hint {
        round = round.use_hint().0;
    }

    let mut steps = Vec::new();
    while round.status() == Status::InProgress {
        let candidates_before = solver.count_candidates(&round);
        let letter = solver.next_letter(&round).ok_or(SolveError::OutOfLetters)?;
        let letter = char::from(letter);

        let (next, outcome) = round.guess(letter)?;
        round = next;

        steps.push(SolveStep {
            letter,
            outcome,
            mask: round.mask().to_string(),
            lives_after: round.lives(),
            candidates_before,
            candidates_after: solver.count_candidates(&round),
        });
    }

    Ok(SolveResult {
        success: round.status() == Status::Won,
        steps,
        target: round.word().text().to_string(),
        hint: round.hint().map(str::to_string),
        lives_left: round.lives(),
        final_mask: round.mask().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, StrategyType};
    use crate::wordlists::Catalog;

    #[test]
    fn solve_word_succeeds() {
        let catalog = Catalog::embedded();
        let solver = Solver::new(FrequencyStrategy, catalog.words());
        let config = SolveConfig::new("ocean".to_string());

        let result = solve_word(config, &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.final_mask, "o c e a n");
        assert!(!result.steps.is_empty());
    }

    #[test]
    fn solve_records_history() {
        let catalog = Catalog::embedded();
        let solver = Solver::new(FrequencyStrategy, catalog.words());
        let config = SolveConfig::new("kaleidoscope".to_string());

        let result = solve_word(config, &solver).unwrap();

        // Candidates never grow and lives never increase
        let mut lives = 5;
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.lives_after <= lives);
            lives = step.lives_after;
        }
        assert_eq!(result.lives_left, lives);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let catalog = Catalog::embedded();
        let solver = Solver::new(FrequencyStrategy, catalog.words());
        let config = SolveConfig::new("r2d2".to_string());

        let result = solve_word(config, &solver);

        assert!(matches!(result, Err(SolveError::InvalidTarget(_))));
    }

    #[test]
    fn solve_word_outside_catalog_still_finishes() {
        let catalog = Catalog::embedded();
        let solver = Solver::new(StrategyType::from_name("frequency"), catalog.words());
        let config = SolveConfig::new("quixotic".to_string());

        let result = solve_word(config, &solver).unwrap();

        assert_eq!(result.target, "quixotic");
        assert!(result.success || result.lives_left == 0);
        assert_eq!(result.hint, None);
    }

    #[test]
    fn solve_with_hint_costs_a_life() {
        let catalog = Catalog::embedded();
        let solver = Solver::new(FrequencyStrategy, catalog.words());
        let mut config = SolveConfig::new("ocean".to_string());
        config.use_hint = true;

        let result = solve_word(config, &solver).unwrap();

        assert_eq!(result.hint.as_deref(), Some("Vast blue expanse"));
        assert!(result.lives_left <= 4);
    }
}
