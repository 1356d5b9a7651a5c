//! Automatic Hangman players
//!
//! This module contains letter selection strategies and the solver that drives them.

mod engine;
pub mod frequency;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
