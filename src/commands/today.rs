//! Today command
//!
//! Describes today's puzzle without revealing its solution.

use crate::core::tokenize;
use crate::game::MAX_GUESSES;
use crate::puzzle::{GameConfig, PuzzleDay, Selection, SelectionSource};
use chrono::NaiveDate;

/// Public facts about today's puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub date: NaiveDate,
    pub epoch: NaiveDate,
    pub day: PuzzleDay,
    pub moves: usize,
    pub max_guesses: usize,
    pub stored: bool,
}

/// Summarize a selection for display
#[must_use]
pub fn today_info(selection: &Selection, date: NaiveDate, config: &GameConfig) -> TodayInfo {
    TodayInfo {
        date,
        epoch: config.epoch,
        day: selection.day,
        moves: tokenize(&selection.solution).len(),
        max_guesses: MAX_GUESSES,
        stored: selection.source == SelectionSource::Stored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::puzzle::{MemoryStore, select_solution};

    #[test]
    fn today_info_reports_moves_not_solution() {
        let epoch = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let config = GameConfig::new(epoch);
        let catalog = Catalog::from_pairs(&[("a", "R U R' U'"), ("b", "R' F R F' U2")]);
        let mut store = MemoryStore::new();

        let selection = select_solution(&catalog, date, &config, &mut store).unwrap();
        let info = today_info(&selection, date, &config);

        assert_eq!(info.day.number(), 2);
        assert_eq!(info.moves, 4);
        assert_eq!(info.max_guesses, 8);
        assert!(!info.stored);

        let again = select_solution(&catalog, date, &config, &mut store).unwrap();
        assert!(today_info(&again, date, &config).stored);
    }
}
