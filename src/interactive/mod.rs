//! Interactive TUI game
//!
//! Full-screen board built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
