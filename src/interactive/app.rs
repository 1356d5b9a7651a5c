//! TUI application state and logic

use crate::core::{GuessOutcome, HintOutcome, Round, Status};
use crate::output::formatters::{LOSE_MESSAGE, WIN_MESSAGE};
use crate::wordlists::Catalog;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// On-screen keyboard rows
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// How a key on the on-screen keyboard is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Available,
    /// Guessed and in the word
    Hit,
    /// Guessed and not in the word
    Miss,
}

/// Application state
pub struct App<'a> {
    pub catalog: &'a Catalog,
    rng: StdRng,
    pub round: Option<Round>,
    /// (row, column) of the highlighted on-screen key
    pub cursor: (usize, usize),
    pub show_info: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, rng: StdRng) -> Self {
        Self {
            catalog,
            rng,
            round: None,
            cursor: (0, 0),
            show_info: false,
            messages: vec![Message {
                text: "Welcome! Press Enter to start a new game.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Current game status; `Idle` before the first round
    #[must_use]
    pub fn status(&self) -> Status {
        Status::of(self.round.as_ref())
    }

    /// Start a new round with a random catalog word
    pub fn new_game(&mut self) {
        let Some(word) = self.catalog.choose(&mut self.rng).cloned() else {
            self.add_message("The word catalog is empty!", MessageStyle::Error);
            return;
        };

        self.round = Some(Round::start(word));
        self.messages.clear();
        self.show_info = false;
        self.add_message(
            "New game started! Pick a letter or press TAB for a hint.",
            MessageStyle::Info,
        );
    }

    /// Guess a letter, as if its on-screen key were pressed
    ///
    /// Keys already pressed this round are disabled and do nothing.
    pub fn press_key(&mut self, letter: char) {
        let Some(round) = self.round.take() else {
            self.add_message("Press Enter to start a new game.", MessageStyle::Info);
            return;
        };
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_alphabetic() && round.has_guessed(letter as u8) {
            self.round = Some(round);
            return;
        }

        let before = round.status();
        match round.clone().guess(letter) {
            Ok((next, outcome)) => {
                self.round = Some(next);
                match outcome {
                    GuessOutcome::Hit { revealed } => self.add_message(
                        &format!("'{}' appears {revealed} time(s)", letter.to_ascii_uppercase()),
                        MessageStyle::Success,
                    ),
                    GuessOutcome::Miss => self.add_message(
                        &format!("No '{}' in the word", letter.to_ascii_uppercase()),
                        MessageStyle::Error,
                    ),
                    GuessOutcome::AlreadyGuessed | GuessOutcome::Ignored(_) => {}
                }
                self.check_finished(before);
            }
            Err(err) => {
                self.round = Some(round);
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Press the key under the cursor
    pub fn press_selected(&mut self) {
        if let Some(letter) = self.selected_letter() {
            self.press_key(letter);
        }
    }

    /// Reveal the hint at the cost of a life
    pub fn use_hint(&mut self) {
        let Some(round) = self.round.take() else {
            self.add_message("No word selected yet.", MessageStyle::Info);
            return;
        };

        let before = round.status();
        let (next, outcome) = round.use_hint();
        self.round = Some(next);
        match outcome {
            HintOutcome::Revealed => {
                self.add_message("Hint revealed (-1 life)", MessageStyle::Info);
            }
            HintOutcome::AlreadyUsed => {
                self.add_message("Hint already shown this round", MessageStyle::Info);
            }
            HintOutcome::Ignored(_) => {}
        }
        self.check_finished(before);
    }

    /// Show or hide the instructions in place of the keyboard
    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    /// Move the keyboard cursor, clamping to the row length
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let last_row = KEYBOARD_ROWS.len() - 1;
        let row = self.cursor.0.saturating_add_signed(d_row).min(last_row);
        let row_len = KEYBOARD_ROWS[row].len();
        let col = self
            .cursor
            .1
            .saturating_add_signed(d_col)
            .min(row_len - 1);
        self.cursor = (row, col);
    }

    /// Letter under the keyboard cursor
    #[must_use]
    pub fn selected_letter(&self) -> Option<char> {
        KEYBOARD_ROWS
            .get(self.cursor.0)
            .and_then(|row| row.chars().nth(self.cursor.1))
    }

    /// Draw state of an on-screen key
    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        match &self.round {
            Some(round) if round.has_guessed(letter as u8) => {
                if round.word().has_letter(letter.to_ascii_lowercase() as u8) {
                    KeyState::Hit
                } else {
                    KeyState::Miss
                }
            }
            _ => KeyState::Available,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.toggle_info(),
            _ if self.show_info => {
                // The keyboard is hidden while instructions are shown
            }
            KeyCode::Enter if !matches!(self.status(), Status::InProgress) => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.press_selected(),
            KeyCode::Tab => self.use_hint(),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.press_key(c),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn check_finished(&mut self, before: Status) {
        let after = self.status();
        if after == before {
            return;
        }
        match after {
            Status::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.add_message(&format!("🎉 {WIN_MESSAGE}"), MessageStyle::Success);
            }
            Status::Lost => {
                self.stats.total_games += 1;
                self.stats.games_lost += 1;
                self.add_message(&format!("💀 {LOSE_MESSAGE}"), MessageStyle::Error);
            }
            Status::Idle | Status::InProgress => return,
        }
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "tui session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ocean_catalog() -> Catalog {
        Catalog::from_pairs(&[("ocean", "Vast blue expanse")])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn app_starts_idle() {
        let catalog = ocean_catalog();
        let app = App::new(&catalog, StdRng::seed_from_u64(3));
        assert_eq!(app.status(), Status::Idle);
        assert!(app.round.is_none());
    }

    #[test]
    fn enter_starts_game_and_letters_guess() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.status(), Status::InProgress);

        type_keys(&mut app, "oz");
        let round = app.round.as_ref().unwrap();
        assert_eq!(round.mask().to_string(), "o _ _ _ _");
        assert_eq!(round.lives(), 4);
        assert_eq!(app.key_state('o'), KeyState::Hit);
        assert_eq!(app.key_state('z'), KeyState::Miss);
        assert_eq!(app.key_state('q'), KeyState::Available);
    }

    #[test]
    fn pressed_keys_are_disabled() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.new_game();

        type_keys(&mut app, "zzzz");
        assert_eq!(app.round.as_ref().unwrap().lives(), 4);
    }

    #[test]
    fn winning_updates_stats() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.new_game();

        type_keys(&mut app, "ocean");
        assert_eq!(app.status(), Status::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.text.contains(WIN_MESSAGE)));

        // Further guesses are ignored and do not count twice
        type_keys(&mut app, "xyz");
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn hint_then_misses_lose() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.new_game();

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.round.as_ref().unwrap().hint(), Some("Vast blue expanse"));
        type_keys(&mut app, "wxyz");

        assert_eq!(app.status(), Status::Lost);
        assert_eq!(app.stats.games_lost, 1);
        assert!(app.messages.iter().any(|m| m.text.contains(LOSE_MESSAGE)));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.status(), Status::InProgress);
        assert_eq!(app.round.as_ref().unwrap().lives(), 5);
    }

    #[test]
    fn info_hides_keyboard() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.new_game();

        app.handle_key(key(KeyCode::F(1)));
        assert!(app.show_info);
        type_keys(&mut app, "o");
        assert!(app.round.as_ref().unwrap().events().is_empty());

        app.handle_key(key(KeyCode::Char('?')));
        assert!(!app.show_info);
    }

    #[test]
    fn cursor_moves_and_presses() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.new_game();

        // q -> w -> e
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.selected_letter(), Some('e'));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.key_state('e'), KeyState::Hit);

        // Clamp at the end of the shorter bottom row
        app.move_cursor(0, 20);
        app.move_cursor(5, 0);
        assert_eq!(app.cursor, (2, 6));
        assert_eq!(app.selected_letter(), Some('m'));
        app.move_cursor(-9, -9);
        assert_eq!(app.cursor, (0, 0));
    }

    #[test]
    fn guessing_before_start_prompts() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        type_keys(&mut app, "a");
        assert!(app.round.is_none());
        app.handle_key(key(KeyCode::Tab));
        assert!(app.messages.iter().any(|m| m.text == "No word selected yet."));
    }

    #[test]
    fn quit_keys() {
        let catalog = ocean_catalog();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn empty_catalog_reports_error() {
        let catalog = Catalog::default();
        let mut app = App::new(&catalog, StdRng::seed_from_u64(3));
        app.new_game();
        assert!(app.round.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }
}
