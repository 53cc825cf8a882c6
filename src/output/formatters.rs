//! Formatting utilities for terminal output

use crate::core::{Classification, FeedbackItem, GuessRecord};
use colored::{ColoredString, Colorize};

/// Placeholder shown for a position the guess never reached
const MISSING: &str = "·";

/// Pad a move to a fixed-width tile
#[must_use]
pub fn tile_text(item: &FeedbackItem, width: usize) -> String {
    let text = item.token_text();
    let text = if text.is_empty() { MISSING } else { text };
    format!("{text:^width$}")
}

/// Color one feedback tile
#[must_use]
pub fn colored_tile(item: &FeedbackItem, width: usize) -> ColoredString {
    let tile = tile_text(item, width);
    match item.classification {
        Classification::Exact => tile.black().on_green().bold(),
        Classification::Partial => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_bright_black(),
    }
}

/// Tile width that fits every move in the record, min 4
#[must_use]
pub fn tile_width(record: &GuessRecord) -> usize {
    record
        .items()
        .iter()
        .map(|item| item.token_text().chars().count() + 2)
        .max()
        .unwrap_or(0)
        .max(4)
}

/// Format a record as a row of colored tiles
#[must_use]
pub fn colored_row(record: &GuessRecord) -> String {
    let width = tile_width(record);
    record
        .items()
        .iter()
        .map(|item| colored_tile(item, width).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_text_centers() {
        let record = GuessRecord::calculate("R U", "R' U");
        assert_eq!(tile_text(&record.items()[0], 4), " R' ");
        assert_eq!(tile_text(&record.items()[1], 3), " U ");
    }

    #[test]
    fn tile_text_missing_position() {
        let record = GuessRecord::calculate("R U", "R");
        assert_eq!(tile_text(&record.items()[1], 3), " · ");
    }

    #[test]
    fn tile_width_minimum() {
        let record = GuessRecord::calculate("R U", "R U");
        assert_eq!(tile_width(&record), 4);

        let wide = GuessRecord::calculate("R U", "Rw2' U");
        assert_eq!(tile_width(&wide), 6);
    }

    #[test]
    fn colored_row_contains_moves() {
        colored::control::set_override(false);
        let record = GuessRecord::calculate("R U R' U'", "R U2 F");
        let row = colored_row(&record);
        assert_eq!(row, " R    U2   F    ·  ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 8, 8), "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(8, 8, 8), "████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(4, 8, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
