//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, KEYBOARD_ROWS, KeyState, Message, MessageStyle, Statistics, run_tui};
