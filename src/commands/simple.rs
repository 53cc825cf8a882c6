//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::game::{MAX_GUESSES, Session, share_summary};
use crate::output::{copy_to_clipboard, print_attempts, print_game_over, print_record};
use colored::Colorize;
use std::io::{self, Write};

/// What a line typed at the prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    Quit,
    Help,
    Share,
    History,
    Guess(String),
}

impl SimpleInput {
    /// Interpret an input line without its line terminator
    ///
    /// Words are only commands when typed alone; anything else is a guess,
    /// including an empty line. Guesses keep their spacing as typed.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "help" | "?" => Self::Help,
            "share" => Self::Share,
            "history" | "h" => Self::History,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: Session) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║           Algle - A Rubik's Cube Algorithm Game              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Puzzle #{}: guess the {}-move algorithm in {MAX_GUESSES} tries.",
        session.day(),
        session.solution_len()
    );
    print_help();

    for (i, record) in session.history().iter().enumerate() {
        print_record(record, i + 1);
    }

    while !session.is_over() {
        let Some(line) = get_user_input(&format!("Guess {}", session.attempts_used() + 1))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match SimpleInput::parse(&line) {
            SimpleInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleInput::Help => print_help(),
            SimpleInput::Share => share(&session)?,
            SimpleInput::History => {
                for (i, record) in session.history().iter().enumerate() {
                    print_record(record, i + 1);
                }
            }
            SimpleInput::Guess(guess) => {
                session = session.submit_guess(&guess).map_err(|e| e.to_string())?;
                if let Some(record) = session.last_record() {
                    print_record(record, session.attempts_used());
                }
                print_attempts(&session);
            }
        }
    }

    print_game_over(&session);
    share(&session)
}

fn print_help() {
    println!("Type moves separated by spaces, e.g. {}", "R U R' U'".bright_white().bold());
    println!(
        "  {} right move   {} right face, wrong direction   {} wrong move",
        "🟩".green(),
        "🟨".yellow(),
        "⬜".bright_black()
    );
    println!("Commands: 'quit' to exit, 'share' to copy results, 'history' to list guesses\n");
}

/// Print the share text and offer to copy it
fn share(session: &Session) -> Result<(), String> {
    let text = share_summary(session);
    println!("\n{text}\n");

    let answer = get_user_input("Copy to clipboard? (yes/no)")?.unwrap_or_default();
    if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
        match copy_to_clipboard(&text) {
            Ok(()) => println!("{}", "✓ Copied to clipboard!".green()),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                println!("{} {e}", "✗ Could not copy:".red());
            }
        }
    }
    Ok(())
}

/// Get user input with a prompt, `None` at end of input
///
/// Only the line terminator is stripped.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleInput::parse("quit"), SimpleInput::Quit);
        assert_eq!(SimpleInput::parse(" Q "), SimpleInput::Quit);
        assert_eq!(SimpleInput::parse("?"), SimpleInput::Help);
        assert_eq!(SimpleInput::parse("share"), SimpleInput::Share);
        assert_eq!(SimpleInput::parse("h"), SimpleInput::History);
    }

    #[test]
    fn parse_guesses() {
        assert_eq!(
            SimpleInput::parse("R U R' U'"),
            SimpleInput::Guess("R U R' U'".to_string())
        );
        // Spacing reaches the scorer untouched
        assert_eq!(
            SimpleInput::parse(" R U"),
            SimpleInput::Guess(" R U".to_string())
        );
        assert_eq!(SimpleInput::parse(""), SimpleInput::Guess(String::new()));
    }

    #[test]
    fn single_move_guesses_are_not_commands() {
        // No move token spells a command word
        assert_eq!(SimpleInput::parse("U"), SimpleInput::Guess("U".to_string()));
        assert_eq!(SimpleInput::parse("D2"), SimpleInput::Guess("D2".to_string()));
    }
}
