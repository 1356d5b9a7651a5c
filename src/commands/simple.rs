//! Simple interactive CLI mode
//!
//! Text-based Hangman without the TUI: one command per line.

use crate::core::{GuessOutcome, HintOutcome, Round, Status};
use crate::output::display::misses_line;
use crate::output::formatters::{INSTRUCTIONS, LOSE_MESSAGE, WIN_MESSAGE, hangman_stage, lives_bar};
use crate::wordlists::Catalog;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Games played during one line-mode session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
}

impl SessionStats {
    fn record(&mut self, status: Status) {
        match status {
            Status::Won => {
                self.games += 1;
                self.won += 1;
            }
            Status::Lost => {
                self.games += 1;
                self.lost += 1;
            }
            Status::Idle | Status::InProgress => {}
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> io::Result<SessionStats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(catalog, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Play rounds reading commands from `input` until `quit` or end of input
///
/// A single letter is a guess; `hint`, `new`, `info`, and `quit` are commands.
///
/// # Errors
///
/// Returns an error on I/O failure, or `InvalidInput` for an empty catalog.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play_session<R, I, O>(
    catalog: &Catalog,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> io::Result<SessionStats>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                     Hangman - Line Mode                      ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Type a letter to guess it.")?;
    writeln!(output, "Commands: 'hint', 'new', 'info', 'quit'\n")?;

    let mut stats = SessionStats::default();
    let mut round = new_round(catalog, rng)?;
    print_round(output, &round)?;

    loop {
        let Some(line) = get_user_input(input, output, "Guess")? else {
            break;
        };
        let command = line.to_lowercase();

        match command.as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "info" => {
                writeln!(output)?;
                for line in INSTRUCTIONS {
                    writeln!(output, "  {line}")?;
                }
                writeln!(output)?;
                continue;
            }
            "new" => {
                round = new_round(catalog, rng)?;
                writeln!(output, "\n🔄 New game started!\n")?;
                print_round(output, &round)?;
                continue;
            }
            "hint" => {
                let before = round.status();
                let (next, outcome) = round.use_hint();
                round = next;
                match outcome {
                    HintOutcome::Revealed => {
                        if let Some(hint) = round.hint() {
                            writeln!(output, "💡 Hint: {hint}")?;
                        }
                    }
                    HintOutcome::AlreadyUsed => writeln!(output, "Hint already shown this round.")?,
                    HintOutcome::Ignored(_) => {
                        writeln!(output, "Round is over. Type 'new' to play again.")?;
                    }
                }
                finish_turn(output, &round, before, &mut stats)?;
                continue;
            }
            _ => {}
        }

        let mut chars = command.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            writeln!(output, "❌ Type a single letter or a command.")?;
            continue;
        };

        let before = round.status();
        match round.clone().guess(letter) {
            Ok((next, outcome)) => {
                round = next;
                match outcome {
                    GuessOutcome::Hit { revealed } => {
                        writeln!(output, "✓ '{letter}' appears {revealed} time(s).")?;
                    }
                    GuessOutcome::Miss => writeln!(output, "✗ No '{letter}' in the word.")?,
                    GuessOutcome::AlreadyGuessed => {
                        writeln!(output, "'{letter}' is already revealed.")?;
                    }
                    GuessOutcome::Ignored(_) => {
                        writeln!(output, "Round is over. Type 'new' to play again.")?;
                    }
                }
                finish_turn(output, &round, before, &mut stats)?;
            }
            Err(err) => writeln!(output, "❌ {err}")?,
        }
    }

    writeln!(
        output,
        "\n👋 Thanks for playing! Won {} of {} games.\n",
        stats.won, stats.games
    )?;
    Ok(stats)
}

fn new_round<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> io::Result<Round> {
    catalog
        .choose(rng)
        .cloned()
        .map(Round::start)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Word catalog is empty"))
}

fn finish_turn<O: Write>(
    output: &mut O,
    round: &Round,
    before: Status,
    stats: &mut SessionStats,
) -> io::Result<()> {
    print_round(output, round)?;

    let after = round.status();
    if after == before {
        return Ok(());
    }
    stats.record(after);
    match after {
        Status::Won => {
            writeln!(output, "\n{}", format!("🎉 {WIN_MESSAGE}").green().bold())?;
        }
        Status::Lost => {
            writeln!(output, "\n{}", format!("💀 {LOSE_MESSAGE}").red().bold())?;
            writeln!(output, "The word was: {}", round.solution().to_uppercase())?;
        }
        Status::Idle | Status::InProgress => return Ok(()),
    }
    writeln!(output, "Type 'new' for another round or 'quit' to exit.\n")
}

fn print_round<O: Write>(output: &mut O, round: &Round) -> io::Result<()> {
    writeln!(output)?;
    for line in hangman_stage(round.lives()) {
        writeln!(output, "    {line}")?;
    }
    writeln!(output, "\n    Word:   {}", round.mask().to_string().to_uppercase())?;
    writeln!(output, "    Lives:  {}", lives_bar(round.lives()))?;
    writeln!(output, "    {}", misses_line(&round.wrong_letters()))?;
    writeln!(output)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
