//! Deterministic daily solution selection
//!
//! # Algorithm
//! 1. `day = days(epoch, today) + 1`
//! 2. If the store already holds a solution for `day`, use it unchanged
//! 3. Otherwise take catalog entry `day mod len` (load order) and store it
//!
//! Every device with the same catalog and epoch lands on the same solution
//! without talking to a server.

use super::{PuzzleDay, PuzzleStore};
use crate::catalog::Catalog;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Default deployment epoch, puzzle #1
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 4, 1) {
    Some(date) => date,
    None => panic!("invalid default epoch"),
};

/// Error type for puzzle selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("algorithm catalog is empty, no puzzle can be derived")]
    EmptyCatalog,
    #[error("date {today} is before the puzzle epoch {epoch}")]
    BeforeEpoch { today: NaiveDate, epoch: NaiveDate },
}

/// Selector settings for one deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub epoch: NaiveDate,
    pub key_prefix: String,
}

impl GameConfig {
    /// Config for an epoch, with the store key prefix derived from it
    ///
    /// Tying the prefix to the epoch means moving the epoch never reuses
    /// records stored under the old numbering.
    #[must_use]
    pub fn new(epoch: NaiveDate) -> Self {
        Self {
            epoch,
            key_prefix: format!("algle:{epoch}:"),
        }
    }

    /// Store key for a puzzle day
    #[must_use]
    pub fn store_key(&self, day: PuzzleDay) -> String {
        format!("{}{day}", self.key_prefix)
    }

    /// Puzzle day for a date under this epoch
    ///
    /// # Errors
    /// Returns `SelectError::BeforeEpoch` if `today` precedes the epoch.
    pub fn puzzle_day(&self, today: NaiveDate) -> Result<PuzzleDay, SelectError> {
        PuzzleDay::between(self.epoch, today).ok_or(SelectError::BeforeEpoch {
            today,
            epoch: self.epoch,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

/// Where a selected solution came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Read back from the store
    Stored,
    /// Picked from the catalog just now
    Derived,
}

/// Today's puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub day: PuzzleDay,
    pub solution: String,
    pub source: SelectionSource,
}

/// Select the solution for `today`
///
/// Store failures never abort selection: a failed read is treated as "nothing
/// stored" and a failed write only loses the memo.
///
/// # Errors
///
/// Returns `SelectError::EmptyCatalog` for an empty catalog and
/// `SelectError::BeforeEpoch` for dates before the epoch.
///
/// # Examples
/// ```
/// use algle::catalog::Catalog;
/// use algle::puzzle::{GameConfig, MemoryStore, select_solution};
/// use chrono::NaiveDate;
///
/// let catalog = Catalog::from_pairs(&[("a", "R U"), ("b", "F R"), ("c", "U2")]);
/// let config = GameConfig::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// let mut store = MemoryStore::new();
///
/// // Day 2 -> index 2 % 3
/// let today = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
/// let selection = select_solution(&catalog, today, &config, &mut store).unwrap();
/// assert_eq!(selection.day.number(), 2);
/// assert_eq!(selection.solution, "U2");
/// ```
pub fn select_solution(
    catalog: &Catalog,
    today: NaiveDate,
    config: &GameConfig,
    store: &mut dyn PuzzleStore,
) -> Result<Selection, SelectError> {
    if catalog.is_empty() {
        return Err(SelectError::EmptyCatalog);
    }

    let day = config.puzzle_day(today)?;
    let key = config.store_key(day);

    match store.get(&key) {
        Ok(Some(solution)) if !solution.trim().is_empty() => {
            debug!(day = day.number(), %key, "using stored solution");
            return Ok(Selection {
                day,
                solution,
                source: SelectionSource::Stored,
            });
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, %key, "failed to read stored puzzle, deriving a fresh one"),
    }

    let (name, solution) = day
        .catalog_index(catalog.len())
        .and_then(|index| catalog.entry_at(index))
        .ok_or(SelectError::EmptyCatalog)?;
    info!(day = day.number(), algorithm = name, "selected daily puzzle");

    if let Err(e) = store.set(&key, solution) {
        warn!(error = %e, %key, "failed to store daily puzzle");
    }

    Ok(Selection {
        day,
        solution: solution.to_string(),
        source: SelectionSource::Derived,
    })
}
