//! Share summary text
//!
//! Pure formatting of a session into the text players paste into chats.
//! Copying it anywhere is the caller's business.

use super::{MAX_GUESSES, Session};

/// Header line of every share text
pub const SHARE_TITLE: &str = "Algle - A Rubik's Cube Algorithm Game";

/// Render the `n/8` ratio, `X/8` when the game was not won
#[must_use]
pub fn score_ratio(session: &Session) -> String {
    session.winning_attempt().map_or_else(
        || format!("X/{MAX_GUESSES}"),
        |n| format!("{n}/{MAX_GUESSES}"),
    )
}

/// Build the share text for a finished or in-progress session
///
/// # Examples
/// ```
/// use algle::game::{Session, share_summary};
/// use algle::puzzle::PuzzleDay;
///
/// let session = Session::new(PuzzleDay::new(9).unwrap(), "R U")
///     .submit_guess("R U2").unwrap()
///     .submit_guess("R U").unwrap();
///
/// let text = share_summary(&session);
/// assert!(text.contains("Puzzle Number: 9"));
/// assert!(text.contains("Number of Guesses: 2/8"));
/// assert!(text.contains("Guess 1: 🟩 🟨"));
/// ```
#[must_use]
pub fn share_summary(session: &Session) -> String {
    let guesses: String = session
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| format!("\nGuess {}: {}", i + 1, record.to_emoji()))
        .collect();

    format!(
        "{SHARE_TITLE}\n\n\
         Puzzle Number: {}\n\
         Number of Guesses: {}\n\n\
         Solution: {}\n\n\
         Guesses:{guesses}",
        session.day(),
        score_ratio(session),
        session.solution(),
    )
}
