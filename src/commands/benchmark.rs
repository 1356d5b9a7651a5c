//! Benchmark command
//!
//! Plays the solver against every target word in parallel and gathers statistics.

use crate::core::{Round, Status, Word};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of one benchmarked word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: usize,
    pub wrong_guesses: usize,
    pub lives_left: u8,
    pub won: bool,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub average_guesses: f64,
    pub average_wrong_guesses: f64,
    /// Lives left at the end of each round (0 for every loss)
    pub lives_distribution: HashMap<u8, usize>,
    /// Words with the most wrong guesses, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play a single round to completion with the solver
pub fn play_word<S: Strategy>(solver: &Solver<S>, target: &Word) -> WordTestResult {
    let mut round = Round::start(target.clone());
    let mut guesses = 0;

    while let Some(letter) = solver.next_letter(&round) {
        match round.clone().guess(char::from(letter)) {
            Ok((next, _)) => round = next,
            Err(_) => break,
        }
        guesses += 1;
    }

    WordTestResult {
        word: target.text().to_string(),
        guesses,
        wrong_guesses: round.penalties(),
        lives_left: round.lives(),
        won: round.status() == Status::Won,
    }
}

/// Run benchmark on a set of target words
///
/// Words are played in parallel. The progress bar is drawn only when
/// `show_progress` is set.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[Word],
    strategy: &'static str,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results: Vec<WordTestResult> = target_words
        .par_iter()
        .map(|target| {
            let result = play_word(solver, target);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let stats = summarize(&results, strategy, duration);
    tracing::info!(
        strategy,
        words = stats.total_words,
        won = stats.won,
        "benchmark finished"
    );
    stats
}

fn summarize(
    results: &[WordTestResult],
    strategy: &'static str,
    duration: Duration,
) -> BenchmarkResult {
    let total_words = results.len();
    let won = results.iter().filter(|r| r.won).count();
    let lost = total_words - won;

    let mut lives_distribution: HashMap<u8, usize> = HashMap::new();
    for result in results {
        *lives_distribution.entry(result.lives_left).or_insert(0) += 1;
    }

    let mut hardest_words: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.wrong_guesses > 0)
        .map(|r| (r.word.clone(), r.wrong_guesses))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    let ratio = |value: usize| {
        if total_words == 0 {
            0.0
        } else {
            value as f64 / total_words as f64
        }
    };

    BenchmarkResult {
        strategy,
        total_words,
        won,
        lost,
        win_rate: ratio(won),
        average_guesses: ratio(results.iter().map(|r| r.guesses).sum()),
        average_wrong_guesses: ratio(results.iter().map(|r| r.wrong_guesses).sum()),
        lives_distribution,
        hardest_words,
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
    }
}
