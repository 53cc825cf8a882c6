//! Daily puzzle selection
//!
//! Turns a calendar date into a puzzle day and picks that day's solution from
//! the catalog, remembering it in a key-value store so reloads on the same day
//! never reshuffle.

mod clock;
mod day;
mod selector;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::PuzzleDay;
pub use selector::{
    DEFAULT_EPOCH, GameConfig, SelectError, Selection, SelectionSource, select_solution,
};
pub use store::{FileStore, MemoryStore, PuzzleStore, StoreError};
