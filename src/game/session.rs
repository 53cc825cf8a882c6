//! Game session state machine
//!
//! A `Session` is an immutable value. `submit_guess` scores a guess and returns
//! the next session; once the game is won or out of attempts every further
//! submission is rejected.

use crate::core::{GuessRecord, Move, split_guess, tokenize};
use crate::puzzle::PuzzleDay;
use tracing::{debug, info};

/// Attempts allowed per puzzle
pub const MAX_GUESSES: usize = 8;

/// Error type for session transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over ({0})")]
    GameAlreadyOver(Terminal),
}

/// Whether the session can still take guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    InProgress,
    Won,
    Exhausted,
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Exhausted => "out of attempts",
        };
        f.write_str(text)
    }
}

/// One player's game against one daily solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    day: PuzzleDay,
    solution: String,
    solution_moves: Vec<Move>,
    history: Vec<GuessRecord>,
    terminal: Terminal,
}

impl Session {
    /// Start a fresh game
    ///
    /// # Examples
    /// ```
    /// use algle::game::{Session, Terminal};
    /// use algle::puzzle::PuzzleDay;
    ///
    /// let session = Session::new(PuzzleDay::new(1).unwrap(), "R U R' U'");
    /// let session = session.submit_guess("R U R' U'").unwrap();
    /// assert_eq!(session.terminal(), Terminal::Won);
    /// ```
    #[must_use]
    pub fn new(day: PuzzleDay, solution: impl Into<String>) -> Self {
        let solution: String = solution.into();
        let solution_moves = tokenize(&solution);

        Self {
            day,
            solution,
            solution_moves,
            history: Vec::new(),
            terminal: Terminal::InProgress,
        }
    }

    /// Score a guess and return the resulting session
    ///
    /// The guess is split on single spaces, so a leading or doubled space is a
    /// blank position that scores absent. Short guesses score their missing
    /// positions as absent; extra moves are ignored. None of this is an error.
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameAlreadyOver` if the game is won or exhausted;
    /// the session is left untouched.
    pub fn submit_guess(&self, raw_guess: &str) -> Result<Self, GameError> {
        if self.terminal != Terminal::InProgress {
            return Err(GameError::GameAlreadyOver(self.terminal));
        }

        let record = GuessRecord::score(&self.solution_moves, &split_guess(raw_guess));
        let won = record.is_perfect();

        let mut history = self.history.clone();
        history.push(record);

        let terminal = if won {
            Terminal::Won
        } else if history.len() >= MAX_GUESSES {
            Terminal::Exhausted
        } else {
            Terminal::InProgress
        };

        debug!(
            day = self.day.number(),
            attempt = history.len(),
            "scored guess"
        );
        if terminal != Terminal::InProgress {
            info!(
                day = self.day.number(),
                attempts = history.len(),
                outcome = %terminal,
                "game over"
            );
        }

        Ok(Self {
            day: self.day,
            solution: self.solution.clone(),
            solution_moves: self.solution_moves.clone(),
            history,
            terminal,
        })
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> PuzzleDay {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Number of moves in the solution
    #[inline]
    #[must_use]
    pub fn solution_len(&self) -> usize {
        self.solution_moves.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_record(&self) -> Option<&GuessRecord> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub const fn terminal(&self) -> Terminal {
        self.terminal
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.terminal != Terminal::InProgress
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// 1-based index of the first all-exact guess, if any
    #[must_use]
    pub fn winning_attempt(&self) -> Option<usize> {
        self.history
            .iter()
            .position(GuessRecord::is_perfect)
            .map(|i| i + 1)
    }
}
