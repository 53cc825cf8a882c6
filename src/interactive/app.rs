//! TUI application state and logic

use crate::game::{Session, Terminal, share_summary};
use crate::output::copy_to_clipboard;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal as TuiTerminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub show_share: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let input_mode = if session.is_over() {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        };

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode,
            show_share: false,
        };

        app.add_message(
            &format!(
                "Puzzle #{}: guess the {}-move algorithm!",
                app.session.day(),
                app.session.solution_len()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type moves separated by spaces, e.g. R U R' U'",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&guess) {
            Ok(next) => self.session = next,
            Err(e) => {
                self.input_mode = InputMode::GameOver;
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        match self.session.terminal() {
            Terminal::Won => {
                self.input_mode = InputMode::GameOver;
                let celebration = match self.session.attempts_used() {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 | 5 => "👏 GREAT JOB! 👏",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 's' to share or 'q' to quit.", MessageStyle::Info);
            }
            Terminal::Exhausted => {
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!(
                        "Out of guesses! The solution was: {}",
                        self.session.solution()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 's' to share or 'q' to quit.", MessageStyle::Info);
            }
            Terminal::InProgress => {
                let left = self.session.attempts_left();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Show the share text and copy it to the clipboard
    pub fn share(&mut self) {
        self.show_share = true;
        match copy_to_clipboard(&share_summary(&self.session)) {
            Ok(()) => self.add_message("Result copied to clipboard!", MessageStyle::Success),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.add_message(&format!("Could not copy: {e}"), MessageStyle::Error);
            }
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = TuiTerminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut TuiTerminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('s') => {
                        app.share();
                    }
                    _ => {
                        // Board is frozen, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input_buffer.push(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;
    use crate::puzzle::PuzzleDay;

    fn app() -> App {
        App::new(Session::new(PuzzleDay::new(3).unwrap(), "R U R' U'"))
    }

    #[test]
    fn new_app_is_guessing() {
        let app = app();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.messages[0].text.contains("Puzzle #3"));
    }

    #[test]
    fn submit_clears_buffer_and_records() {
        let mut app = app();
        app.input_buffer = "R U R2 U'".to_string();
        app.submit_guess();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.attempts_used(), 1);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.messages.last().unwrap().text, "7 guesses left");
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut app = app();
        app.input_buffer = "R U R' U'".to_string();
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn exhausting_guesses_reveals_solution() {
        let mut app = app();
        for _ in 0..MAX_GUESSES {
            app.input_buffer = "F".to_string();
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The solution was: R U R' U'"))
        );
    }

    #[test]
    fn submit_after_game_over_is_rejected() {
        let mut app = app();
        app.input_buffer = "R U R' U'".to_string();
        app.submit_guess();
        app.input_buffer = "R".to_string();
        app.submit_guess();

        assert_eq!(app.session.attempts_used(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn finished_session_starts_in_game_over() {
        let session = Session::new(PuzzleDay::new(1).unwrap(), "R")
            .submit_guess("R")
            .unwrap();
        assert_eq!(App::new(session).input_mode, InputMode::GameOver);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
