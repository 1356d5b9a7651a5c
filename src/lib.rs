//! Hangman
//!
//! A Hangman word game with a terminal UI, a line-mode interface, and an
//! automatic solver for benchmarking letter strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, Round, Status, Word};
//!
//! let word = Word::new("ocean", "Vast blue expanse").unwrap();
//! let round = Round::start(word);
//!
//! let (round, outcome) = round.guess('o').unwrap();
//! assert_eq!(outcome, GuessOutcome::Hit { revealed: 1 });
//! assert_eq!(round.mask().to_string(), "o _ _ _ _");
//! assert_eq!(round.lives(), 5);
//! assert_eq!(round.status(), Status::InProgress);
//! ```

// Core domain types
pub mod core;

// Automatic letter selection
pub mod solver;

// Word catalogs
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Environment configuration
pub mod config;
