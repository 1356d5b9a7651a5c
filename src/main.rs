//! Hangman - CLI
//!
//! Hangman with TUI and line modes, plus an automatic solver for
//! replaying and benchmarking the word catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_word},
    config::{Config, WordlistSource},
    output::{print_benchmark_result, print_catalog, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
    wordlists::{Catalog, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word game with a terminal UI and an automatic solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver strategy: frequency (default), random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'builtin' or path to a word<TAB>hint file [env: HANGMAN_WORDLIST]
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for reproducible word selection [env: HANGMAN_SEED]
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Let the solver play a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Spend a life on the hint before guessing
        #[arg(long)]
        hint: bool,
    },

    /// Let the solver play every catalog word
    Benchmark {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the words in the catalog
    List {
        /// Show each word's hint
        #[arg(long)]
        hints: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().with_overrides(cli.wordlist.as_deref(), cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it may only log to a file
    let _guard = match command {
        Commands::Play => setup_file_logging(&config)?,
        _ => {
            setup_stderr_logging();
            None
        }
    };

    let catalog = load_catalog(&config.wordlist)?;
    tracing::debug!(words = catalog.len(), seed = ?config.seed, "catalog ready");

    match command {
        Commands::Play => run_play_command(&catalog, config.seed),
        Commands::Simple => run_simple_command(&catalog, config.seed),
        Commands::Solve {
            word,
            verbose,
            hint,
        } => run_solve_command(&cli.strategy, &word, verbose, hint, &catalog),
        Commands::Benchmark { limit } => {
            run_benchmark_command(&cli.strategy, limit, &catalog);
            Ok(())
        }
        Commands::List { hints } => {
            print_catalog(&catalog, hints);
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn setup_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log to `<log_dir>/hangman.log` when a log directory is configured
///
/// The returned guard flushes the file writer when dropped.
fn setup_file_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(log_dir) = &config.log_dir else {
        return Ok(None);
    };
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "hangman.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .init();

    tracing::info!("Log file: {}/hangman.log", log_dir.display());
    Ok(Some(guard))
}

/// Load the catalog selected by `-w` / `HANGMAN_WORDLIST`
fn load_catalog(source: &WordlistSource) -> Result<Catalog> {
    match source {
        WordlistSource::Builtin => Ok(Catalog::embedded()),
        WordlistSource::File(path) => Ok(load_from_file(path)?),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_solve_command(
    strategy_name: &str,
    word: &str,
    verbose: bool,
    hint: bool,
    catalog: &Catalog,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, catalog.words());
    solve_command(word, verbose, hint, &solver)
}

fn solve_command<S: Strategy>(
    word: &str,
    verbose: bool,
    hint: bool,
    solver: &Solver<S>,
) -> Result<()> {
    let mut config = SolveConfig::new(word.to_string());
    config.use_hint = hint;
    let result = solve_word(config, solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, limit: Option<usize>, catalog: &Catalog) {
    let strategy = StrategyType::from_name(strategy_name);
    let name = strategy.name();
    let solver = Solver::new(strategy, catalog.words());

    let count = limit.unwrap_or(catalog.len()).min(catalog.len());
    println!("Running benchmark on {count} words with the {name} strategy...");

    let test_words = &catalog.words()[..count];
    let result = run_benchmark(&solver, test_words, name, true);
    print_benchmark_result(&result);
}

fn run_simple_command(catalog: &Catalog, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    let stats = run_simple(catalog, &mut rng)?;
    tracing::info!(games = stats.games, won = stats.won, "line session ended");
    Ok(())
}

fn run_play_command(catalog: &Catalog, seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(catalog, make_rng(seed));
    run_tui(app)
}
