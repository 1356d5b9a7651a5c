//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, WordTestResult, play_word, run_benchmark};
pub use simple::{SessionStats, play_session, run_simple};
pub use solve::{SolveConfig, SolveError, SolveResult, SolveStep, solve_word};
