//! Core domain types for Hangman
//!
//! This module contains the word, mask, and round state machine. Everything here
//! is a plain value with no I/O, so rounds can be created, cloned, and tested freely.

mod mask;
mod round;
mod word;

pub use mask::{Mask, PLACEHOLDER};
pub use round::{GuessOutcome, HintOutcome, Round, RoundError, RoundEvent, STARTING_LIVES, Status};
pub use word::{Word, WordError};
