//! Display functions for command results

use super::formatters::{create_progress_bar, letter_list, lives_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{GuessOutcome, STARTING_LIVES};
use crate::wordlists::Catalog;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    if let Some(hint) = &result.hint {
        println!("Hint:    {}", hint.italic());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let marker = match step.outcome {
            GuessOutcome::Hit { .. } => "✓".green(),
            GuessOutcome::Miss => "✗".red(),
            GuessOutcome::AlreadyGuessed | GuessOutcome::Ignored(_) => "·".bright_black(),
        };
        println!(
            "\nTurn {}: {} {} {}  {}",
            i + 1,
            step.letter.to_ascii_uppercase(),
            marker,
            step.mask.to_uppercase(),
            lives_bar(step.lives_after).red()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} of {} lives left!",
                result.steps.len(),
                result.lives_left,
                STARTING_LIVES
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Won / lost:       {} / {}", result.won, result.lost);
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Average misses:   {:.2}", result.average_wrong_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Lives left:".bright_cyan().bold());
        for lives in (0..=STARTING_LIVES).rev() {
            let count = result.lives_distribution.get(&lives).copied().unwrap_or(0);
            let pct = count as f64 / result.total_words as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {lives}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n🪢 {}", "Hardest words:".bright_cyan().bold());
        for (word, misses) in &result.hardest_words {
            println!("   {:<16} {misses} misses", word.to_uppercase());
        }
    }
}

/// Print every word in a catalog, hints optional
pub fn print_catalog(catalog: &Catalog, show_hints: bool) {
    println!("{} words:", catalog.len().to_string().bright_cyan().bold());
    for word in catalog {
        if show_hints {
            println!("  {:<16} {}", word.text(), word.hint().bright_black());
        } else {
            println!("  {}", word.text());
        }
    }
}

/// One-line summary of wrong letters, used by the line-mode game
#[must_use]
pub fn misses_line(wrong: &[u8]) -> String {
    if wrong.is_empty() {
        "Misses: none".to_string()
    } else {
        format!("Misses: {}", letter_list(wrong))
    }
}
