//! Command implementations

pub mod check;
pub mod score;
pub mod simple;
pub mod today;

pub use check::{CatalogReport, check_catalog};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
pub use today::{TodayInfo, today_info};
