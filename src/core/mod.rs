//! Core domain types for Algle
//!
//! This module contains the move notation and feedback types with zero I/O.
//! All types here are pure, testable, and have clear comparison rules.

mod feedback;
mod notation;

pub use feedback::{Classification, FeedbackItem, GuessRecord};
pub use notation::{Move, MoveError, MoveKind, split_guess, tokenize};
