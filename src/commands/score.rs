//! Score command
//!
//! Scores a single guess against an arbitrary algorithm.

use crate::core::{GuessRecord, split_guess, tokenize};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub solution: String,
    pub guess: String,
    pub record: GuessRecord,
}

/// Score `guess` against `solution`
///
/// The guess is split on single spaces exactly like a game guess.
///
/// # Errors
///
/// Returns an error if the solution contains no moves.
pub fn score_guess(solution: &str, guess: &str) -> Result<ScoreResult, String> {
    let solution_moves = tokenize(solution);
    if solution_moves.is_empty() {
        return Err("Solution must contain at least one move".to_string());
    }

    let record = GuessRecord::score(&solution_moves, &split_guess(guess));

    Ok(ScoreResult {
        solution: solution.trim().to_string(),
        guess: guess.to_string(),
        record,
    })
}
