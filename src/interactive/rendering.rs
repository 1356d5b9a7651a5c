//! TUI rendering with ratatui
//!
//! Gallows, masked word, on-screen keyboard, and message panels.

use super::app::{App, KEYBOARD_ROWS, KeyState, MessageStyle};
use crate::core::Status;
use crate::output::formatters::{INSTRUCTIONS, hangman_stage, letter_list, lives_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(7),  // Keyboard / instructions
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word, hint, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    if app.show_info {
        render_instructions(f, chunks[2]);
    } else {
        render_keyboard(f, app, chunks[2]);
    }

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.round.as_ref().map_or(0, crate::core::Round::lives);
    let color = match app.status() {
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
        Status::Idle | Status::InProgress => Color::White,
    };

    let mut lines: Vec<Line> = hangman_stage(lives)
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(color))))
        .collect();
    lines.push(Line::from(""));
    if app.round.is_some() {
        lines.push(Line::from(Span::styled(
            lives_bar(lives),
            Style::default().fg(Color::Red),
        )));
    }

    let gallows = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(gallows, area);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Hint
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.round {
        None => vec![Line::from("Press Enter to start")],
        Some(round) => {
            // The word is revealed in full once the round is lost
            let (shown, color) = match round.status() {
                Status::Lost => (round.solution(), Color::Red),
                Status::Won => (round.mask().to_string(), Color::Green),
                Status::Idle | Status::InProgress => (round.mask().to_string(), Color::Yellow),
            };
            let wrong = round.wrong_letters();
            vec![
                Line::from(Span::styled(
                    shown.to_uppercase(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    if wrong.is_empty() {
                        String::new()
                    } else {
                        format!("Misses: {}", letter_list(&wrong))
                    },
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    };

    let word = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let text = app
        .round
        .as_ref()
        .and_then(|round| round.hint())
        .unwrap_or("TAB: reveal hint (-1 life)");

    let hint = Paragraph::new(text)
        .style(Style::default().fg(Color::Magenta))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Hint ").borders(Borders::ALL));
    f.render_widget(hint, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, letters)| {
            let spans: Vec<Span> = letters
                .chars()
                .enumerate()
                .map(|(col, letter)| {
                    let mut style = match app.key_state(letter) {
                        KeyState::Available => Style::default().fg(Color::White),
                        KeyState::Hit => Style::default().fg(Color::Green),
                        KeyState::Miss => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    if app.cursor == (row, col) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(keyboard, area);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = INSTRUCTIONS.iter().map(|line| Line::from(*line)).collect();

    let info = Paragraph::new(lines)
        .style(Style::default().fg(Color::Cyan))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" How to play | F1 or ? to close ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(info, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.status() {
        Status::Idle => "Idle",
        Status::InProgress => "Playing",
        Status::Won => "Won",
        Status::Lost => "Lost",
    };
    let mode = Paragraph::new(format!("Status: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.status() == Status::InProgress {
        "Letters/Space: Guess | TAB: Hint | Ctrl-N: New | F1: Info | Esc: Quit"
    } else {
        "Enter: New Game | F1: Info | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn idle_screen_prompts_to_start() {
        let catalog = Catalog::from_pairs(&[("ocean", "Vast blue expanse")]);
        let app = App::new(&catalog, StdRng::seed_from_u64(1));
        let screen = render_to_string(&app);
        assert!(screen.contains("Press Enter to start"));
        assert!(screen.contains("Status: Idle"));
    }

    #[test]
    fn playing_screen_shows_mask_and_hint() {
        let catalog = Catalog::from_pairs(&[("ocean", "Vast blue expanse")]);
        let mut app = App::new(&catalog, StdRng::seed_from_u64(1));
        app.new_game();
        app.press_key('o');
        app.use_hint();

        let screen = render_to_string(&app);
        assert!(screen.contains("O _ _ _ _"));
        assert!(screen.contains("Vast blue expanse"));
        assert!(screen.contains("Status: Playing"));
    }

    #[test]
    fn info_replaces_keyboard() {
        let catalog = Catalog::from_pairs(&[("ocean", "Vast blue expanse")]);
        let mut app = App::new(&catalog, StdRng::seed_from_u64(1));
        app.toggle_info();

        let screen = render_to_string(&app);
        assert!(screen.contains("How to play"));
        assert!(!screen.contains(" Keyboard "));
    }
}
