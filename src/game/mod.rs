//! Guess evaluation and game state
//!
//! This module contains the session state machine and the share summary.

mod session;
mod share;

pub use session::{GameError, MAX_GUESSES, Session, Terminal};
pub use share::{SHARE_TITLE, score_ratio, share_summary};
