//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and the clipboard.

pub mod clipboard;
pub mod display;
pub mod formatters;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use display::{
    print_attempts, print_catalog_report, print_game_over, print_record, print_score_result,
    print_today,
};
