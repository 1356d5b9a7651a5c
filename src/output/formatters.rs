//! Formatting utilities for terminal output

use crate::core::STARTING_LIVES;

/// Shown when a round is won
pub const WIN_MESSAGE: &str = "Congratulations, you won!";

/// Shown when a round is lost
pub const LOSE_MESSAGE: &str = "You lost!";

/// How to play, shown by the info toggle
pub const INSTRUCTIONS: &[&str] = &[
    "Guess the hidden word one letter at a time.",
    "A correct letter is revealed everywhere it appears.",
    "A wrong letter costs a life; you start with 5.",
    "The hint shows a clue about the word but also costs a life.",
    "Reveal the whole word before your lives run out.",
];

/// Gallows drawings indexed by remaining lives (0 = complete figure)
const STAGES: [[&str; 6]; 6] = [
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        " / \\  |",
        "=======",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        "      |",
        "=======",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|   |",
        "      |",
        "=======",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "  |   |",
        "      |",
        "=======",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "      |",
        "      |",
        "=======",
    ],
    [
        "  +---+",
        "  |   |",
        "      |",
        "      |",
        "      |",
        "=======",
    ],
];

/// The hangman drawing for a number of remaining lives
///
/// Lives above the starting count draw the empty gallows.
#[must_use]
pub fn hangman_stage(lives: u8) -> &'static [&'static str] {
    let idx = usize::from(lives.min(STARTING_LIVES));
    &STAGES[idx]
}

/// Lives as filled and empty hearts, e.g. `♥♥♥♡♡`
#[must_use]
pub fn lives_bar(lives: u8) -> String {
    let lives = lives.min(STARTING_LIVES);
    format!(
        "{}{}",
        "♥".repeat(usize::from(lives)),
        "♡".repeat(usize::from(STARTING_LIVES - lives))
    )
}

/// Letters as an uppercase, space separated list
#[must_use]
pub fn letter_list(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&l| char::from(l.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
